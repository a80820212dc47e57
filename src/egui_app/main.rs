/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the egui native desktop client.
 * It implements eframe::App and renders the leaderboard, forum, submit,
 * admin and profile screens against the backend's REST API.
 */
use dapphunt::egui_app::{views, AppState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "DappHunt",
        options,
        Box::new(|cc| {
            dapphunt::egui_app::theme::styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(HuntApp::default()))
        }),
    )
}

/// Main application state
struct HuntApp {
    state: AppState,
}

impl Default for HuntApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for HuntApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Worker threads report over channels, so frames keep coming while
        // a request is in flight.
        self.state.check_background_results();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
