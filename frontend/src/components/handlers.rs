use super::super::Msg;
use super::super::Model;
use super::utils::first_file;
use crate::api;
use crate::error::PredictError;
use gloo_file::{File as GlooFile, FileReadError};
use gloo_timers::callback::Timeout;
use shared::{
    PredictionResult, ReportTab, RequestId, SessionEvent, StatusOutcome, validate_candidate,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub const PREDICTION_FAILED: &str = "Analysis failed. Please try again.";

fn apply(model: &mut Model, event: SessionEvent<GlooFile>) {
    model.session = model.session.apply(event);
}

pub fn handle_candidate(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    let name = file.name();

    if let Err(err) = validate_candidate(&name, &file.raw_mime_type()) {
        log::warn!("Skipping non-image file: {}", name);
        model.preview_reader = None;
        apply(model, SessionEvent::FileRejected(err));
        return true;
    }

    log::info!("Selected {} ({} bytes)", name, file.size());
    apply(model, SessionEvent::FileAccepted { name, file: file.clone() });

    if let Some(selection) = model.session.selected_file().map(|selected| selected.id) {
        let link = ctx.link().clone();
        // replacing the reader aborts the decode of the previous file
        model.preview_reader = Some(gloo_file::callbacks::read_as_data_url(&file, move |result| {
            link.send_message(Msg::PreviewDecoded(selection, result));
        }));
    }

    true
}

pub fn handle_preview_decoded(
    model: &mut Model,
    selection: u64,
    result: Result<String, FileReadError>,
) -> bool {
    if model.session.selected_file().is_some_and(|selected| selected.id == selection) {
        model.preview_reader = None;
    }

    match result {
        Ok(data_url) => apply(model, SessionEvent::PreviewDecoded { selection, data_url }),
        Err(e) => {
            log::error!("Failed to decode preview: {:?}", e);
            apply(model, SessionEvent::PreviewFailed { selection });
        }
    }
    true
}

pub fn handle_reupload(model: &mut Model) -> bool {
    model.preview_reader = None;
    model.progress_timeout = None;
    apply(model, SessionEvent::Reset);
    true
}

pub fn handle_poll_status(model: &mut Model, ctx: &Context<Model>) -> bool {
    let link = ctx.link().clone();
    let config = model.config.clone();

    spawn_local(async move {
        let outcome = api::check_status(&config).await;
        link.send_message(Msg::StatusChecked(outcome));
    });

    false
}

pub fn handle_status_checked(model: &mut Model, outcome: StatusOutcome) -> bool {
    let was_ready = model.session.is_ready();
    apply(model, SessionEvent::StatusChecked(outcome));

    if was_ready != model.session.is_ready() {
        log::info!("Prediction service is now {}", model.session.status());
    }

    let now = js_sys::Date::new_0();
    model.last_checked = Some(String::from(now.to_locale_time_string("en-US")));
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if !model.session.can_analyze() {
        return false;
    }

    let request = RequestId::new();
    apply(model, SessionEvent::AnalysisStarted(request));

    let Some(file) = model.session.selected_file().map(|selected| selected.file.clone()) else {
        return true;
    };
    model.progress_timeout = None;

    log::info!("Submitting {} as request {}", file.name(), request);
    spawn_local({
        let link = ctx.link().clone();
        let config = model.config.clone();

        async move {
            let result = api::submit_prediction(&config, &file).await;
            link.send_message(Msg::PredictionFinished(request, result));
        }
    });

    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    request: RequestId,
    result: Result<PredictionResult, PredictError>,
) -> bool {
    match result {
        Ok(prediction) => {
            log::info!(
                "Prediction {}: {} ({:.2}%)",
                request,
                prediction.predicted_label,
                prediction.confidence
            );
            apply(model, SessionEvent::PredictionSucceeded { request, result: prediction });
        }
        Err(e) => {
            gloo_console::error!(format!("Prediction failed: {}", e));
            log::error!("Prediction {} failed: {}", request, e);
            apply(
                model,
                SessionEvent::PredictionFailed { request, message: PREDICTION_FAILED.to_string() },
            );
        }
    }

    if model.session.progress().is_some_and(|progress| progress.request == request) {
        let link = ctx.link().clone();
        model.progress_timeout = Some(Timeout::new(model.config.progress_hide_delay_ms, move || {
            link.send_message(Msg::HideProgress(request));
        }));
    }

    true
}

pub fn handle_hide_progress(model: &mut Model, request: RequestId) -> bool {
    model.progress_timeout = None;
    apply(model, SessionEvent::ProgressElapsed(request));
    true
}

pub fn handle_select_tab(model: &mut Model, tab: ReportTab) -> bool {
    if model.session.active_tab() == tab {
        return false;
    }
    apply(model, SessionEvent::TabSelected(tab));
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event.data_transfer().and_then(|dt| dt.files()).as_ref().and_then(first_file) {
        ctx.link().send_message(Msg::CandidateSelected(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(file) = event.clipboard_data().and_then(|dt| dt.files()).as_ref().and_then(first_file) {
        event.prevent_default();
        ctx.link().send_message(Msg::CandidateSelected(file));
    }
    false
}
