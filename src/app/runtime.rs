use crate::terminal::{KeyCode, KeyEvent, KeyModifiers, Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use crate::widgets::components::contact_form::ContactForm;
use crate::widgets::traits::Interactive;
use std::io;
use std::time::Duration;
use tracing::debug;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct Runtime {
    form: ContactForm,
    terminal: Terminal,
    should_exit: bool,
}

impl Runtime {
    pub fn new(form: ContactForm, terminal: Terminal) -> Self {
        Self {
            form,
            terminal,
            should_exit: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.should_exit {
                if !self.terminal.poll(POLL_TIMEOUT)? {
                    continue;
                }
                let event = self.terminal.read_event()?;
                if self.dispatch(event) {
                    self.render()?;
                }
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    /// Returns whether the screen needs a redraw.
    fn dispatch(&mut self, event: TerminalEvent) -> bool {
        match event {
            TerminalEvent::Resize(size) => {
                debug!(width = size.width, height = size.height, "terminal resized");
                true
            }
            TerminalEvent::Key(key) if is_exit_key(key) => {
                self.should_exit = true;
                false
            }
            TerminalEvent::Key(key) => self.form.on_key(key).request_render,
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = Renderer::render(&self.form.render());
        self.terminal.render_frame(&frame)
    }
}

fn is_exit_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
