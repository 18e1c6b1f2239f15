//! The interactive session loop.
//!
//! Discrete user events arrive as lines on stdin; every event mutates
//! session state through the [`BlogApi`] handle and the whole view is
//! re-rendered afterwards. All transitions are synchronous; nothing here
//! blocks on anything but the next line of input.

use std::io::{self, BufRead, Write};

use console::Term;

use ablog::api::BlogApi;
use ablog::commands::CmdMessage;
use ablog::error::Result;

use super::render;

const HELP: &str = "\
Commands:
  add <title> :: <body>   draft and submit a post in one line
  title <text>            set the draft title
  body <text>             set the draft body
  post                    submit the current draft
  search [text]           filter the visible list (empty to clear)
  clear                   remove all posts
  archive                 show or hide the archive panel
  promote <n> [<n>...]    copy archive entries into the main list
  theme                   toggle dark mode
  export                  dump the post collection as JSON
  quit                    leave the session";

enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    api: BlogApi,
    plain: bool,
    /// Cached archive panel body; the pool never changes after startup.
    archive_body: Option<String>,
    pending_messages: Vec<CmdMessage>,
    pending_payload: Option<String>,
}

impl Shell {
    pub fn new(api: BlogApi, plain: bool) -> Self {
        Self {
            api,
            plain,
            archive_body: None,
            pending_messages: Vec::new(),
            pending_payload: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match self.dispatch(line.trim()) {
                Flow::Quit => break,
                Flow::Continue => self.render()?,
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let term = Term::stdout();
        if !self.plain && term.is_term() {
            term.clear_screen()?;
        }

        let listed = self.api.list()?.listed_posts;
        render::render_view(&self.api, &listed, &mut self.archive_body);

        if let Some(payload) = self.pending_payload.take() {
            println!("{}", payload);
        }
        render::print_messages(&self.pending_messages);
        self.pending_messages.clear();

        if !self.plain {
            print!("> ");
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Flow {
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "add" => {
                let (title, body) = match rest.split_once("::") {
                    Some((title, body)) => (title.trim(), body.trim()),
                    None => (rest, ""),
                };
                self.api.set_draft_title(title);
                self.api.set_draft_body(body);
                self.submit();
            }
            "title" => self.api.set_draft_title(rest),
            "body" => self.api.set_draft_body(rest),
            "post" => self.submit(),
            "search" => {
                let result = self.api.search(rest);
                self.collect(result);
            }
            "clear" => {
                let result = self.api.clear_posts();
                self.collect(result);
            }
            "archive" => {
                self.api.toggle_archive();
            }
            "promote" => self.promote(rest),
            "theme" => {
                self.api.toggle_theme();
            }
            "export" => match self.api.export() {
                Ok(result) => self.pending_payload = result.export_json,
                Err(e) => self.pending_messages.push(CmdMessage::error(e.to_string())),
            },
            "help" => self.pending_messages.push(CmdMessage::info(HELP)),
            "quit" | "exit" | "q" => return Flow::Quit,
            other => self.pending_messages.push(CmdMessage::warning(format!(
                "Unknown command: {} (try 'help')",
                other
            ))),
        }
        Flow::Continue
    }

    fn submit(&mut self) {
        let result = self.api.submit_draft();
        self.collect(result);
    }

    fn promote(&mut self, rest: &str) {
        let mut indexes = Vec::new();
        for token in rest.split_whitespace() {
            // Archive entries are listed as a1, a2, ...; the prefix is optional.
            let digits = token.strip_prefix('a').unwrap_or(token);
            match digits.parse::<usize>() {
                Ok(n) => indexes.push(n),
                Err(_) => {
                    self.pending_messages.push(CmdMessage::warning(format!(
                        "Not an archive index: {}",
                        token
                    )));
                    return;
                }
            }
        }
        if indexes.is_empty() {
            self.pending_messages
                .push(CmdMessage::warning("promote needs at least one index"));
            return;
        }
        let result = self.api.promote(&indexes);
        self.collect(result);
    }

    fn collect(&mut self, result: Result<ablog::commands::CmdResult>) {
        match result {
            Ok(result) => self.pending_messages.extend(result.messages),
            Err(e) => self.pending_messages.push(CmdMessage::error(e.to_string())),
        }
    }
}
