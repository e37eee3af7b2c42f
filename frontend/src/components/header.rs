use shared::ServiceStatus;
use yew::prelude::*;

/// Renders the application header with the service status indicator
pub fn render_header(status: ServiceStatus, last_checked: Option<&str>) -> Html {
    let title = match last_checked {
        Some(time) => format!("Last checked at {}", time),
        None => "Waiting for the first status check".to_string(),
    };

    html! {
        <header class="app-header">
            <div>
                <h1><i class="fa-solid fa-brain"></i> {" Brain Tumor MRI Diagnosis"}</h1>
                <p class="subtitle">{"Upload an MRI scan via button, drag & drop, or paste"}</p>
            </div>
            <div id="service-status" class={classes!("status-indicator", status.css_class())} {title}>
                <span class="status-dot"></span>
                <span class="status-text">{ status.to_string() }</span>
            </div>
        </header>
    }
}
