//! Command dispatch
//!
//! Maps a parsed line to its handler. Handlers are pure: they read the
//! session and filesystem and describe their effects in the returned
//! [`CommandResult`]; the terminal controller applies them afterwards.
//! Dispatch is total -- an unknown name is a normal result, not a failure.

mod commands;

use crate::content::ContentLibrary;
use crate::session::{Session, SessionPatch};
use crate::vfs::{VfsNode, VfsPath};

/// Commands the dispatcher understands
pub const COMMANDS: &[&str] = &[
    "cd", "ls", "open", "serve", "clear", "useradd", "logout", "connect", "help",
];

/// Output lines plus the effects a handler wants applied
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: Vec<String>,
    pub effects: SideEffects,
}

impl CommandResult {
    /// Result with a single output line and no effects
    fn message(line: String) -> Self {
        Self {
            output: vec![line],
            ..Default::default()
        }
    }
}

/// Effects applied by the controller after a handler returns
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// New working directory
    pub navigate: Option<VfsPath>,
    /// Empty the transcript
    pub clear_screen: bool,
    /// Session update
    pub session: SessionPatch,
    /// Link target for the presentation layer to open
    pub open_external: Option<String>,
    /// Page key for the presentation layer to render
    pub serve_page: Option<String>,
}

/// Run one command. The empty command name is the no-op produced by blank
/// input.
pub fn dispatch(
    command: &str,
    args: &[String],
    session: &Session,
    vfs: &VfsNode,
    library: &ContentLibrary,
) -> CommandResult {
    log::debug!("dispatch: {:?} {:?}", command, args);
    match command {
        "" => CommandResult::default(),
        "help" => commands::cmd_help(),
        "cd" => commands::cmd_cd(args, session, vfs),
        "ls" => commands::cmd_ls(args, session, vfs),
        "open" => commands::cmd_open(args, session, vfs),
        "serve" => commands::cmd_serve(args, session, vfs, library),
        "clear" => commands::cmd_clear(),
        "useradd" => commands::cmd_useradd(args, session),
        "logout" => commands::cmd_logout(session),
        "connect" => commands::cmd_connect(),
        _ => CommandResult::message(format!("{}: command not found", command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;

    fn fixture() -> (Session, VfsNode, ContentLibrary) {
        let mut root = VfsNode::root();
        let mut projects = VfsNode::dir("projects");
        projects.insert(VfsNode::page("site.page", "site")).ok();
        projects
            .insert(VfsNode::link("repo.lnk", "https://example.com/repo"))
            .ok();
        root.insert(projects).ok();
        root.insert(VfsNode::text("about.txt", "hello\nworld")).ok();
        root.insert(VfsNode::page("orphan.page", "unknown-key")).ok();

        let mut library = ContentLibrary::new();
        library.insert(
            "site",
            PageContent {
                title: String::from("Site"),
                body: vec![String::from("Site")],
            },
        );
        (Session::new(), root, library)
    }

    fn run(line_cmd: &str, args: &[&str]) -> CommandResult {
        let (session, root, library) = fixture();
        let args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();
        dispatch(line_cmd, &args, &session, &root, &library)
    }

    #[test]
    fn test_unknown_command() {
        let result = run("frobnicate", &[]);
        assert_eq!(result.output, vec!["frobnicate: command not found"]);
        assert_eq!(result.effects, SideEffects::default());
    }

    #[test]
    fn test_empty_command_is_noop() {
        let result = run("", &[]);
        assert!(result.output.is_empty());
        assert_eq!(result.effects, SideEffects::default());
    }

    #[test]
    fn test_cd_navigates() {
        let result = run("cd", &["projects"]);
        assert!(result.output.is_empty());
        assert_eq!(
            result.effects.navigate.map(|p| p.to_string()),
            Some(String::from("/projects"))
        );
    }

    #[test]
    fn test_cd_missing_directory() {
        let result = run("cd", &["attic"]);
        assert_eq!(result.output, vec!["attic: no such directory"]);
        assert!(result.effects.navigate.is_none());
    }

    #[test]
    fn test_cd_file_target_is_error() {
        let result = run("cd", &["about.txt"]);
        assert_eq!(result.output, vec!["about.txt: no such directory"]);
    }

    #[test]
    fn test_cd_no_argument_goes_to_root() {
        let result = run("cd", &[]);
        assert_eq!(
            result.effects.navigate.map(|p| p.to_string()),
            Some(String::from("/"))
        );
    }

    #[test]
    fn test_ls_insertion_order() {
        let result = run("ls", &[]);
        assert_eq!(
            result.output,
            vec!["projects/", "about.txt", "orphan.page"]
        );
    }

    #[test]
    fn test_ls_of_file_is_error() {
        let result = run("ls", &["about.txt"]);
        assert_eq!(result.output, vec!["about.txt: no such directory"]);
    }

    #[test]
    fn test_ls_empty_directory_prints_nothing() {
        let session = Session::new();
        let mut root = VfsNode::root();
        root.insert(VfsNode::dir("empty")).ok();
        let library = ContentLibrary::new();
        let result = dispatch(
            "ls",
            &[String::from("empty")],
            &session,
            &root,
            &library,
        );
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_open_text_file() {
        let result = run("open", &["about.txt"]);
        assert_eq!(result.output, vec!["hello", "world"]);
        assert!(result.effects.open_external.is_none());
    }

    #[test]
    fn test_open_link_reports_target_and_signals() {
        let result = run("open", &["projects/repo.lnk"]);
        assert_eq!(result.output, vec!["opening https://example.com/repo"]);
        assert_eq!(
            result.effects.open_external,
            Some(String::from("https://example.com/repo"))
        );
    }

    #[test]
    fn test_open_directory_is_error() {
        let result = run("open", &["projects"]);
        assert_eq!(result.output, vec!["projects: is a directory"]);
    }

    #[test]
    fn test_open_missing_is_error() {
        let result = run("open", &["nope.txt"]);
        assert_eq!(result.output, vec!["nope.txt: no such file"]);
    }

    #[test]
    fn test_open_page_points_at_serve() {
        let result = run("open", &["orphan.page"]);
        assert_eq!(
            result.output,
            vec!["orphan.page: not a text file (serve it instead)"]
        );
    }

    #[test]
    fn test_serve_page() {
        let result = run("serve", &["projects/site.page"]);
        assert_eq!(result.output, vec!["serving projects/site.page"]);
        assert_eq!(result.effects.serve_page, Some(String::from("site")));
    }

    #[test]
    fn test_serve_rejects_non_pages() {
        for target in ["about.txt", "projects", "missing.page"] {
            let result = run("serve", &[target]);
            assert_eq!(result.output, vec![format!("{}: not a page", target)]);
            assert!(result.effects.serve_page.is_none());
        }
    }

    #[test]
    fn test_serve_rejects_unresolvable_key() {
        let result = run("serve", &["orphan.page"]);
        assert_eq!(result.output, vec!["orphan.page: not a page"]);
    }

    #[test]
    fn test_clear_sets_effect_only() {
        let result = run("clear", &[]);
        assert!(result.output.is_empty());
        assert!(result.effects.clear_screen);
    }

    #[test]
    fn test_useradd_adds_and_logs_in() {
        let result = run("useradd", &["owen"]);
        assert_eq!(
            result.output,
            vec!["user owen created", "logged in as owen"]
        );
        assert_eq!(result.effects.session.add_user, Some(String::from("owen")));
        assert_eq!(result.effects.session.login, Some(String::from("owen")));
    }

    #[test]
    fn test_useradd_duplicate_is_idempotent() {
        let (mut session, root, library) = fixture();
        session.apply(SessionPatch {
            add_user: Some(String::from("owen")),
            ..Default::default()
        });
        let result = dispatch(
            "useradd",
            &[String::from("owen")],
            &session,
            &root,
            &library,
        );
        assert_eq!(result.output, vec!["user already exists"]);
        assert_eq!(result.effects.session, SessionPatch::default());
    }

    #[test]
    fn test_useradd_rejects_bad_names() {
        let result = run("useradd", &["bad name"]);
        assert_eq!(result.output, vec!["useradd: invalid username"]);
        assert_eq!(result.effects.session, SessionPatch::default());
    }

    #[test]
    fn test_logout_without_login() {
        let result = run("logout", &[]);
        assert_eq!(result.output, vec!["not logged in"]);
        assert!(!result.effects.session.logout);
    }

    #[test]
    fn test_logout_clears_user() {
        let (mut session, root, library) = fixture();
        session.apply(SessionPatch {
            add_user: Some(String::from("owen")),
            login: Some(String::from("owen")),
            logout: false,
        });
        let result = dispatch("logout", &[], &session, &root, &library);
        assert_eq!(result.output, vec!["logged out owen"]);
        assert!(result.effects.session.logout);
    }

    #[test]
    fn test_help_lists_commands() {
        let result = run("help", &[]);
        let text = result.output.join("\n");
        for name in COMMANDS {
            if *name != "help" {
                assert!(text.contains(name), "help is missing {}", name);
            }
        }
        assert!(text.contains("tab"));
    }

    #[test]
    fn test_connect_is_static() {
        let first = run("connect", &[]);
        let second = run("connect", &[]);
        assert_eq!(first, second);
        assert!(!first.output.is_empty());
        assert_eq!(first.effects, SideEffects::default());
    }
}
