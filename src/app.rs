//! Init/update/draw lifecycle for interactive console programs.
//!
//! Implementors embed an [`ExitFlag`] and expose it through
//! `exit_flag`/`exit_flag_mut`; the provided methods handle stopping and the
//! run loop. A drawing application is any implementor that overrides
//! [`Application::draw`].

/// One-way stop flag. Once set, it stays set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitFlag {
    exit_called: bool,
}

impl ExitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit(&mut self) {
        self.exit_called = true;
    }

    pub fn should_run(&self) -> bool {
        !self.exit_called
    }
}

/// Lifecycle contract for a console program.
pub trait Application {
    /// Called once before the first update.
    fn init(&mut self);

    /// Advance one step. Call [`Application::exit`] to stop the loop.
    fn update(&mut self);

    /// Render the current state. Runs after every update, including the one
    /// that called `exit`.
    fn draw(&mut self) {}

    fn exit_flag(&self) -> &ExitFlag;

    fn exit_flag_mut(&mut self) -> &mut ExitFlag;

    fn exit(&mut self) {
        self.exit_flag_mut().exit();
    }

    fn should_run(&self) -> bool {
        self.exit_flag().should_run()
    }

    /// `init`, then `update` + `draw` until `exit` is called.
    fn run(&mut self) {
        self.init();
        while self.should_run() {
            self.update();
            self.draw();
        }
        tracing::debug!("application loop finished");
    }
}
