//! folioterm
//!
//! A simulated terminal for embedding in a content site: a command
//! interpreter over a virtual in-memory filesystem with a small
//! session/user model, command history and tab-completion. The host
//! application owns rendering and real navigation; this crate owns the
//! interpreter, the namespace and the transcript.
//!
//! ```
//! use folioterm::{Terminal, TerminalConfig};
//!
//! let mut terminal = Terminal::with_site(TerminalConfig::default());
//! terminal.submit_line("ls");
//! for line in terminal.transcript() {
//!     println!("{}", line);
//! }
//! ```

pub mod complete;
pub mod config;
pub mod content;
pub mod history;
pub mod parser;
pub mod session;
pub mod shell;
pub mod terminal;
pub mod vfs;

pub use config::TerminalConfig;
pub use content::{ContentLibrary, PageContent};
pub use session::Session;
pub use shell::{CommandResult, SideEffects};
pub use terminal::{KeyEvent, Terminal, UiSignal};
pub use vfs::{FileKind, VfsNode, VfsPath};
