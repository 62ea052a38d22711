use userview_business::FetchUsersCommand;

use crate::{state::State, widgets};

pub struct UserViewApp {
    state: State,
    fetch_dispatched: bool,
}

impl UserViewApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetch_dispatched: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for UserViewApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The records are fetched exactly once per session.
        if !self.fetch_dispatched {
            self.state.ctx.dispatch::<FetchUsersCommand>();
            self.fetch_dispatched = true;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            users_page(&mut self.state, ui);
        });
    }
}

/// One frame of the users page.
///
/// Applies values published since the last frame, renders, then runs the commands and
/// computes the render queued or dirtied. Their results show up on the next frame, which is
/// requested here.
pub fn users_page(state: &mut State, ui: &mut egui::Ui) {
    state.ctx.sync_computes();

    ui.heading("Users");
    ui.add_space(4.0);
    widgets::users_panel(&mut state.ctx, ui);

    let ran = state.ctx.flush_commands() + state.ctx.run_computed();
    if ran > 0 {
        ui.ctx().request_repaint();
    }
}
