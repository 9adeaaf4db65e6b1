//! REPL (Read-Eval-Print Loop) for the interactive chat

use crate::ConsoleFormatter;
use crate::ThinkingSpinner;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use samvaad_application::{ChatSession, DeferredAction, DeferredKind, TurnOutcome, VoiceIo};
use samvaad_domain::conversation::filters;
use samvaad_domain::{MessageId, MessageOrigin, supported_languages};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Interactive chat REPL
///
/// Numbers select menu options, plain text submits a free-text question,
/// slash commands drive everything else. Deferred dialogue transitions are
/// driven between prompts: menu re-renders are waited out, notice removals
/// apply once their delay has passed.
pub struct ChatRepl {
    controller: ChatSession,
    voice: Arc<dyn VoiceIo>,
    show_spinner: bool,
    pending: Vec<(Instant, DeferredAction)>,
}

impl ChatRepl {
    pub fn new(controller: ChatSession, voice: Arc<dyn VoiceIo>) -> Self {
        Self {
            controller,
            voice,
            show_spinner: true,
            pending: Vec::new(),
        }
    }

    /// Set whether to show the thinking indicator.
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("samvaad").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome_banner());
        println!("Type {} for commands.", "/help".yellow());
        println!();
        self.render_transcript();

        loop {
            self.drain_pending().await;

            let prompt = if self.controller.free_text_enabled() {
                ">>> "
            } else {
                "select> "
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(&line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(&line);
                    self.handle_input(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Dispatch a non-command line: a number selects a menu option,
    /// anything else is a free-text submission.
    async fn handle_input(&mut self, line: &str) {
        if let Ok(number) = line.parse::<usize>() {
            let payload = self
                .controller
                .transcript()
                .latest_options()
                .and_then(|options| options.get(number.wrapping_sub(1)))
                .map(|option| option.payload.clone());
            match payload {
                Some(payload) => {
                    let outcome = self.controller.select_option(&payload);
                    self.render_outcome(outcome);
                }
                None => println!("No option {} right now.", number),
            }
            return;
        }

        if !self.controller.free_text_enabled() {
            println!("Please pick one of the numbered options (or /help).");
            return;
        }

        let spinner = self.show_spinner.then(ThinkingSpinner::start);
        let outcome = self.controller.submit_free_text(line).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }
        self.render_outcome(outcome);
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&mut self, command: &str) -> bool {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or(command);
        let args: Vec<&str> = parts.collect();

        match name {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" | "/?" => self.print_help(),
            "/reset" => {
                let outcome = self.controller.reset();
                self.pending.clear();
                self.render_outcome(outcome);
            }
            "/end" => {
                let outcome = self.controller.end();
                self.render_outcome(outcome);
            }
            "/say" => {
                let id = match args.first() {
                    Some(raw) => match raw.parse::<u64>() {
                        Ok(n) => Some(MessageId(n)),
                        Err(_) => {
                            println!("Usage: /say [message-id]");
                            None
                        }
                    },
                    None => self.latest_assistant_id(),
                };
                if let Some(id) = id {
                    let outcome = self.controller.speak_message(id).await;
                    self.render_outcome(outcome);
                }
            }
            "/listen" => self.listen_and_submit().await,
            "/lang" => match args.first() {
                Some(tag) => match self.controller.set_language(tag) {
                    Ok(()) => println!("Language set to {}.", tag.bold()),
                    Err(e) => println!("{}", e),
                },
                None => {
                    for (tag, display_name) in supported_languages() {
                        println!("  {}  {}", tag.yellow(), display_name);
                    }
                }
            },
            "/filters" => self.handle_filters(&args),
            _ => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn handle_filters(&mut self, args: &[&str]) {
        match args {
            [] => {
                println!(
                    "{}",
                    ConsoleFormatter::format_filters(self.controller.session().filters())
                );
                println!("  batch:    {}", filters::BATCHES.join(", "));
                println!("  branch:   {}", filters::BRANCHES.join(", "));
                println!("  semester: {}", filters::SEMESTERS.join(", "));
                println!("  doctype:  {}", filters::DOC_TYPES.join(", "));
                println!("Set with: /filters <field> <value>");
            }
            [field, rest @ ..] if !rest.is_empty() => {
                let value = rest.join(" ");
                let result = match *field {
                    "batch" => self.controller.set_batch(&value),
                    "branch" => self.controller.set_branch(&value),
                    "semester" => self.controller.set_semester(&value),
                    "doctype" => self.controller.set_doc_type(&value),
                    other => {
                        println!("Unknown filter field: {}", other);
                        return;
                    }
                };
                match result {
                    Ok(()) => println!(
                        "{}",
                        ConsoleFormatter::format_filters(self.controller.session().filters())
                    ),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Usage: /filters [<field> <value>]"),
        }
    }

    /// Voice input: recognize once and submit the transcript as free text.
    async fn listen_and_submit(&mut self) {
        let language = self.controller.language().to_string();
        match self.voice.start_listening(&language) {
            Ok(receiver) => {
                println!("{}", "Listening...".dimmed());
                match receiver.await {
                    Ok(transcript) => {
                        println!("{} {}", "Heard:".dimmed(), transcript);
                        self.handle_input(&transcript).await;
                    }
                    Err(_) => println!("{}", "Recognition was stopped.".dimmed()),
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    fn latest_assistant_id(&self) -> Option<MessageId> {
        self.controller
            .transcript()
            .messages()
            .iter()
            .rev()
            .find(|m| m.origin == MessageOrigin::Assistant && !m.kind.is_notice())
            .map(|m| m.id)
    }

    /// Print newly appended turns and queue any deferred transition.
    fn render_outcome(&mut self, outcome: TurnOutcome) {
        let rendered_turns = !outcome.appended.is_empty();
        for message in &outcome.appended {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        if let Some(sources) = ConsoleFormatter::format_sources(&outcome.sources) {
            println!("{}", sources);
        }
        if rendered_turns
            && let Some(options) = self.controller.transcript().latest_options()
        {
            println!("{}", ConsoleFormatter::format_options(options));
        }
        if let Some(action) = outcome.deferred {
            self.pending.push((Instant::now() + action.delay, action));
        }
    }

    /// Apply queued deferred transitions. Menu re-renders are waited out
    /// (they gate the next prompt); notice removals apply once due and are
    /// otherwise carried to the next pass.
    async fn drain_pending(&mut self) {
        let mut carry = Vec::new();
        for (due, action) in std::mem::take(&mut self.pending) {
            match action.kind {
                DeferredKind::RedisplayMenu => {
                    let now = Instant::now();
                    if due > now {
                        tokio::time::sleep(due - now).await;
                    }
                    let outcome = self.controller.apply_deferred(action);
                    self.render_outcome(outcome);
                }
                DeferredKind::RemoveNotice(_) => {
                    if Instant::now() >= due {
                        debug!("Expiring transient notice");
                        let _ = self.controller.apply_deferred(action);
                    } else {
                        carry.push((due, action));
                    }
                }
            }
        }
        self.pending.extend(carry);
    }

    fn render_transcript(&self) {
        for message in self.controller.transcript().messages() {
            println!("{}", ConsoleFormatter::format_message(message));
        }
        if let Some(options) = self.controller.transcript().latest_options() {
            println!("{}", ConsoleFormatter::format_options(options));
        }
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /reset            - Start over from the greeting");
        println!("  /end              - End the chat");
        println!("  /say [id]         - Read the last (or a specific) reply aloud");
        println!("  /listen           - Ask a question by voice");
        println!("  /lang [tag]       - List languages, or switch to one");
        println!("  /filters [f v]    - Show or set the student filters");
        println!("  /quit, /exit, /q  - Leave");
        println!();
        println!("Numbers select menu options; anything else is sent as a question.");
        println!();
    }
}
