use std::io::{self, BufRead, Write};
use std::mem;
use std::sync::mpsc;
use std::thread;

use interest_core::{update, AppState, AppViewModel, Effect, Msg};
use suggestion_engine::{ClientSettings, SuggestionClient};
use suggestion_logging::suggest_info;

use crate::effects::EffectRunner;
use crate::{input, render};

/// Everything the main loop reacts to, from the keyboard or the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbox {
    Msg(Msg),
    Help,
    Notice(String),
    Quit,
}

pub trait EffectExecutor {
    fn execute(&mut self, effects: Vec<Effect>);
}

/// Sole owner of `AppState`; messages are applied one at a time.
pub struct Controller<E> {
    state: AppState,
    executor: E,
}

impl<E: EffectExecutor> Controller<E> {
    pub fn new(executor: E) -> Self {
        Self {
            state: AppState::new(),
            executor,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies `msg`, runs the resulting effects and returns a view when a
    /// render is due.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let state = mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        self.executor.execute(effects);
        view
    }
}

pub fn run(settings: ClientSettings) -> anyhow::Result<()> {
    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let client = SuggestionClient::from_settings(settings)?;
    let mut controller = Controller::new(EffectRunner::new(client, inbox_tx.clone()));

    spawn_input_reader(inbox_tx);

    let mut out = io::stdout().lock();
    write_lines(&mut out, &render::render(&controller.view()))?;
    write_lines(&mut out, &render::help())?;

    while let Ok(item) = inbox_rx.recv() {
        match item {
            Inbox::Msg(msg) => {
                if let Some(view) = controller.dispatch(msg) {
                    write_lines(&mut out, &render::render(&view))?;
                }
            }
            Inbox::Help => write_lines(&mut out, &render::help())?,
            Inbox::Notice(text) => write_lines(&mut out, &[text])?,
            Inbox::Quit => break,
        }
    }

    suggest_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(inbox_tx: mpsc::Sender<Inbox>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(item) = input::parse_line(&line) {
                let quit = item == Inbox::Quit;
                if inbox_tx.send(item).is_err() || quit {
                    return;
                }
            }
        }
        let _ = inbox_tx.send(Inbox::Quit);
    });
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
