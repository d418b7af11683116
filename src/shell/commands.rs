//! Command handlers
//!
//! One function per command. Every error is converted into plain output
//! here; nothing escapes to the controller as a failure.

use super::{CommandResult, SideEffects};
use crate::content::ContentLibrary;
use crate::session::{Session, SessionPatch};
use crate::vfs::{self, FileKind, VfsNode};

const HELP_TEXT: &str = "\
Available commands:
    cd - Change the current directory
    ls - List files and folders in the current directory
    open - Opens a .lnk or .txt file (read-only)
    serve - Serve a given '.page' file
    clear - Clear the terminal
    useradd - Adds a new user
    logout - Logs you out
    connect - Let's connect

Navigation:
    Use the up and down arrows to cycle through previous commands.
    Press the tab key to autocomplete the name of a folder or file in the current directory
";

const CONNECT_TEXT: &str =
    "Let's connect! The links under projects/ go to my repositories.";

pub(super) fn cmd_help() -> CommandResult {
    CommandResult {
        output: HELP_TEXT.lines().map(String::from).collect(),
        ..Default::default()
    }
}

pub(super) fn cmd_cd(args: &[String], session: &Session, root: &VfsNode) -> CommandResult {
    let raw = args.first().map(String::as_str).unwrap_or("/");
    match vfs::resolve_dir(raw, &session.cwd, root) {
        Ok(path) => CommandResult {
            effects: SideEffects {
                navigate: Some(path),
                ..Default::default()
            },
            ..Default::default()
        },
        Err(_) => CommandResult::message(format!("{}: no such directory", raw)),
    }
}

pub(super) fn cmd_ls(args: &[String], session: &Session, root: &VfsNode) -> CommandResult {
    let target = match args.first() {
        Some(raw) => match vfs::resolve_dir(raw, &session.cwd, root) {
            Ok(path) => path,
            Err(_) => return CommandResult::message(format!("{}: no such directory", raw)),
        },
        None => session.cwd.clone(),
    };

    let Some(node) = vfs::lookup(root, &target) else {
        return CommandResult::message(format!("{}: no such directory", target));
    };

    let output = node
        .children()
        .iter()
        .map(|child| {
            if child.is_dir() {
                format!("{}/", child.name())
            } else {
                String::from(child.name())
            }
        })
        .collect();
    CommandResult {
        output,
        ..Default::default()
    }
}

pub(super) fn cmd_open(args: &[String], session: &Session, root: &VfsNode) -> CommandResult {
    let Some(raw) = args.first() else {
        return CommandResult::message(String::from("Usage: open <file>"));
    };

    let node = vfs::resolve(raw, &session.cwd, root)
        .ok()
        .and_then(|path| vfs::lookup(root, &path));
    match node {
        Some(VfsNode::File { kind, content, .. }) => match kind {
            FileKind::Text => CommandResult {
                output: content.lines().map(String::from).collect(),
                ..Default::default()
            },
            FileKind::Link => CommandResult {
                output: vec![format!("opening {}", content)],
                effects: SideEffects {
                    open_external: Some(content.clone()),
                    ..Default::default()
                },
            },
            FileKind::Page => CommandResult::message(format!(
                "{}: not a text file (serve it instead)",
                raw
            )),
        },
        Some(VfsNode::Directory { .. }) => {
            CommandResult::message(format!("{}: is a directory", raw))
        }
        None => CommandResult::message(format!("{}: no such file", raw)),
    }
}

pub(super) fn cmd_serve(
    args: &[String],
    session: &Session,
    root: &VfsNode,
    library: &ContentLibrary,
) -> CommandResult {
    let Some(raw) = args.first() else {
        return CommandResult::message(String::from("Usage: serve <page>"));
    };

    let node = vfs::resolve(raw, &session.cwd, root)
        .ok()
        .and_then(|path| vfs::lookup(root, &path));
    if let Some(VfsNode::File {
        kind: FileKind::Page,
        content: key,
        ..
    }) = node
    {
        if library.resolve_page(key).is_some() {
            return CommandResult {
                output: vec![format!("serving {}", raw)],
                effects: SideEffects {
                    serve_page: Some(key.clone()),
                    ..Default::default()
                },
            };
        }
        log::warn!("page file {} holds unresolvable key {:?}", raw, key);
    }
    CommandResult::message(format!("{}: not a page", raw))
}

pub(super) fn cmd_clear() -> CommandResult {
    CommandResult {
        effects: SideEffects {
            clear_screen: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub(super) fn cmd_useradd(args: &[String], session: &Session) -> CommandResult {
    let Some(name) = args.first() else {
        return CommandResult::message(String::from("Usage: useradd <username>"));
    };

    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return CommandResult::message(String::from("useradd: invalid username"));
    }

    if session.has_user(name) {
        return CommandResult::message(String::from("user already exists"));
    }

    CommandResult {
        output: vec![
            format!("user {} created", name),
            format!("logged in as {}", name),
        ],
        effects: SideEffects {
            session: SessionPatch {
                add_user: Some(name.clone()),
                login: Some(name.clone()),
                logout: false,
            },
            ..Default::default()
        },
    }
}

pub(super) fn cmd_logout(session: &Session) -> CommandResult {
    match &session.current_user {
        Some(name) => CommandResult {
            output: vec![format!("logged out {}", name)],
            effects: SideEffects {
                session: SessionPatch {
                    logout: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        },
        None => CommandResult::message(String::from("not logged in")),
    }
}

pub(super) fn cmd_connect() -> CommandResult {
    CommandResult::message(String::from(CONNECT_TEXT))
}
