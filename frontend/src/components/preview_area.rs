use super::super::{Model, Msg};
use super::utils::display_name;
use shared::{Preview, Progress, SelectedFile};
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(selected) = model.session.selected_file() else {
        return html! {};
    };

    html! {
        <div id="preview-container">
            { render_selected_image_preview(selected) }
            <p class="selected-file-name" title={selected.name.clone()}>
                <i class="fa-solid fa-file-image"></i>{ format!(" {}", display_name(&selected.name, 40)) }
            </p>
            <div class="button-container">
                <button
                    id="analyze-btn"
                    class="analyze-btn"
                    onclick={ctx.link().callback(|_| Msg::Analyze)}
                    disabled={!model.session.can_analyze()}
                    title={ if model.session.is_ready() { "" } else { "Waiting for the prediction service" } }
                >
                    { render_analyze_button_content(model) }
                </button>
            </div>
            {
                match model.session.progress() {
                    Some(progress) => render_progress(progress),
                    None => html! {},
                }
            }
        </div>
    }
}

fn render_selected_image_preview<F>(selected: &SelectedFile<F>) -> Html {
    match &selected.preview {
        Preview::Loading => html! {
            <div class="loading-preview">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Loading preview..."}</p>
            </div>
        },
        Preview::Ready(data_url) => html! {
            <img id="actual-image-preview"
                src={data_url.clone()}
                alt={selected.name.clone()} />
        },
        Preview::Unavailable => html! {
            <div class="unavailable-preview">
                <p>{"Preview unavailable"}</p>
            </div>
        },
    }
}

fn render_analyze_button_content(model: &Model) -> Html {
    let label = model.session.analyze_label();
    if model.session.in_flight().is_some() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{ format!(" {}", label) }</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" {}", label) }</> }
    }
}

fn render_progress(progress: Progress) -> Html {
    html! {
        <div class="progress" role="progressbar" aria-valuenow={progress.percent.to_string()}>
            <div class="progress-fill" style={format!("width: {}%", progress.percent)}></div>
        </div>
    }
}
