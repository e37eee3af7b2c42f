mod api;
mod components;
mod error;

use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use error::PredictError;
use gloo_events::EventListener;
use gloo_file::callbacks::FileReader;
use gloo_file::{File as GlooFile, FileReadError};
use gloo_timers::callback::{Interval, Timeout};
use shared::{ClientConfig, PredictionResult, ReportTab, RequestId, Session, StatusOutcome};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // File operations
    CandidateSelected(GlooFile),
    PreviewDecoded(u64, Result<String, FileReadError>),
    Reupload,

    // Service status
    PollStatus,
    StatusChecked(StatusOutcome),

    // Analysis operations
    Analyze,
    PredictionFinished(RequestId, Result<PredictionResult, PredictError>),
    HideProgress(RequestId),
    SelectTab(ReportTab),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
pub struct Model {
    config: Rc<ClientConfig>,
    session: Session<GlooFile>,
    is_dragging: bool,
    last_checked: Option<String>,
    paste_listener: Option<EventListener>,
    status_poll: Option<Interval>,
    preview_reader: Option<FileReader>,
    progress_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Rc::new(ClientConfig::from_build_env());
        let mut model = Self {
            config: Rc::clone(&config),
            session: Session::new(),
            is_dragging: false,
            last_checked: None,
            paste_listener: None,
            status_poll: None,
            preview_reader: None,
            progress_timeout: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No global window, paste support disabled");
        }

        let link = ctx.link().clone();
        model.status_poll = Some(Interval::new(config.status_poll_interval_ms, move || {
            link.send_message(Msg::PollStatus);
        }));
        ctx.link().send_message(Msg::PollStatus);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::CandidateSelected(file) => handlers::handle_candidate(self, ctx, file),
            Msg::PreviewDecoded(selection, result) => {
                handlers::handle_preview_decoded(self, selection, result)
            }
            Msg::Reupload => handlers::handle_reupload(self),

            // Service status
            Msg::PollStatus => handlers::handle_poll_status(self, ctx),
            Msg::StatusChecked(outcome) => handlers::handle_status_checked(self, outcome),

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::PredictionFinished(request, result) => {
                handlers::handle_prediction_finished(self, ctx, request, result)
            }
            Msg::HideProgress(request) => handlers::handle_hide_progress(self, request),
            Msg::SelectTab(tab) => handlers::handle_select_tab(self, tab),

            // UI states
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.session.status(), self.last_checked.as_deref()) }

                <main class="main-content">
                    <section class="upload-panel">
                        { render_upload_section(self, ctx) }
                        { render_error_message(self) }
                        { render_preview_area(self, ctx) }
                    </section>
                    <section class="report-panel">
                        { render_results(self, ctx) }
                    </section>
                </main>

                <footer class="app-footer">
                    <p>{"For research use only. Not a substitute for professional medical advice."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
