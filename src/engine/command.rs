//! Command line arguments for engine invocations.
//!
//! The argument order here is what a `docker`-compatible CLI receives and is
//! relied upon by callers that inspect engine invocations.

use super::BuildInvocation;

/// `build [--label <kv>]... -t <reference> [-f <dockerfile>] <context_dir>`
pub fn build_args(invocation: &BuildInvocation<'_>) -> Vec<String> {
    let mut args = Vec::with_capacity(5 + invocation.labels.len() * 2);
    args.push("build".to_string());

    for label in invocation.labels {
        args.push("--label".to_string());
        args.push(label.clone());
    }

    args.push("-t".to_string());
    args.push(invocation.reference.to_string());

    if let Some(dockerfile) = invocation.dockerfile {
        args.push("-f".to_string());
        args.push(dockerfile.display().to_string());
    }

    args.push(invocation.context_dir.display().to_string());
    args
}

/// `tag <source_ref> <target>`
pub fn tag_args(source_ref: &str, target: &str) -> Vec<String> {
    vec!["tag".to_string(), source_ref.to_string(), target.to_string()]
}

/// `push <reference>`
pub fn push_args(reference: &str) -> Vec<String> {
    vec!["push".to_string(), reference.to_string()]
}

/// Renders a command for display, quoting arguments that contain whitespace.
pub fn render(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        if arg.is_empty() || arg.chars().any(char::is_whitespace) {
            rendered.push('\'');
            rendered.push_str(&arg.replace('\'', "'\\''"));
            rendered.push('\'');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}
