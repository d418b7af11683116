//! Terminal controller
//!
//! One instance per embedded terminal. Owns the filesystem, session,
//! history and transcript, and turns key events into command cycles:
//! parse, dispatch, apply effects, record history, extend the transcript.
//! Everything is synchronous; a keystroke is handled to completion before
//! the next one arrives.

use crate::complete;
use crate::config::TerminalConfig;
use crate::content::{self, ContentLibrary};
use crate::history::History;
use crate::parser;
use crate::session::Session;
use crate::shell::{self, CommandResult};
use crate::vfs::{self, VfsNode};

/// Key events the embedder forwards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
}

/// Signals for the presentation layer, drained via
/// [`Terminal::take_signals`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiSignal {
    /// `open` followed a link; the embedder decides what to do with it
    OpenExternal(String),
    /// `serve` validated a page; switch to document mode for this key
    ServePage(String),
}

pub struct Terminal {
    vfs: VfsNode,
    session: Session,
    history: History,
    library: ContentLibrary,
    config: TerminalConfig,
    transcript: Vec<String>,
    draft: String,
    signals: Vec<UiSignal>,
}

impl Terminal {
    /// Build a terminal over an injected filesystem and content library
    pub fn new(vfs: VfsNode, library: ContentLibrary, config: TerminalConfig) -> Self {
        log::debug!("terminal ready: host={}", config.host);
        let transcript = config.greeting.clone();
        Self {
            vfs,
            session: Session::new(),
            history: History::new(),
            library,
            config,
            transcript,
            draft: String::new(),
            signals: Vec::new(),
        }
    }

    /// Terminal over the built-in site content
    pub fn with_site(config: TerminalConfig) -> Self {
        Self::new(content::seed_vfs(), content::site_library(), config)
    }

    /// Prompt for the current user and directory, e.g. `guest@folio:/$ `
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.session.user_display(),
            self.config.host,
            self.session.cwd
        )
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drain pending presentation-layer signals
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Run one full interpreter cycle for `raw`
    pub fn submit_line(&mut self, raw: &str) {
        let echo = format!("{}{}", self.prompt(), raw);
        let (command, args) = parser::parse(raw);
        let result = shell::dispatch(&command, &args, &self.session, &self.vfs, &self.library);
        self.history.append(raw);
        self.apply(echo, result);
    }

    /// Feed one key event
    pub fn key(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Char(c) => self.draft.push(c),
            KeyEvent::Backspace => {
                self.draft.pop();
            }
            KeyEvent::Enter => {
                let raw = std::mem::take(&mut self.draft);
                self.submit_line(&raw);
            }
            KeyEvent::Up => {
                if let Some(entry) = self.history.prev() {
                    self.draft = String::from(entry);
                }
            }
            KeyEvent::Down => {
                if let Some(entry) = self.history.next() {
                    self.draft = String::from(entry);
                }
            }
            KeyEvent::Tab => self.complete_draft(),
        }
    }

    // Apply a command's effects, then extend the transcript. `clear`
    // drops its own echo line; the transcript ends the cycle empty.
    fn apply(&mut self, echo: String, result: CommandResult) {
        let effects = result.effects;

        if effects.clear_screen {
            self.transcript.clear();
        } else {
            self.transcript.push(echo);
            self.transcript.extend(result.output);
        }

        if let Some(path) = effects.navigate {
            self.session.cwd = path;
        }
        self.session.apply(effects.session);

        if let Some(url) = effects.open_external {
            self.signals.push(UiSignal::OpenExternal(url));
        }
        if let Some(key) = effects.serve_page {
            self.signals.push(UiSignal::ServePage(key));
        }
    }

    // Replace the last whitespace-delimited token of the draft when
    // exactly one child name matches it; ambiguous matches leave the
    // draft unchanged.
    fn complete_draft(&mut self) {
        let start = self
            .draft
            .rfind(char::is_whitespace)
            .map(|i| {
                i + self.draft[i..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1)
            })
            .unwrap_or(0);
        let partial = &self.draft[start..];

        let candidates = complete::complete(partial, &self.session.cwd, &self.vfs);
        if candidates.len() != 1 {
            return;
        }

        let name = &candidates[0];
        let is_dir = vfs::lookup(&self.vfs, &self.session.cwd)
            .and_then(|node| node.child(name))
            .map(VfsNode::is_dir)
            .unwrap_or(false);

        let mut completed = String::from(&self.draft[..start]);
        completed.push_str(name);
        if is_dir {
            completed.push('/');
        }
        self.draft = completed;
    }
}
