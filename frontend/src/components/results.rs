use super::super::{Model, Msg};
use shared::{ClassificationReport, ConfidenceBar, Finding, ReportPanel, ReportTab, ReportView};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="results-container">
            { render_tabs(model, ctx) }
            <div id="report-area" class="report-area">
                { render_panel(model.session.report(), ctx) }
            </div>
        </div>
    }
}

fn render_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    let enabled = model.session.tabs_enabled();
    let active = model.session.active_tab();

    html! {
        <div class="report-tabs" role="tablist">
            { for ReportTab::all().map(|tab| html! {
                <button
                    class={classes!("tab-btn", (tab == active).then_some("active"))}
                    role="tab"
                    disabled={!enabled}
                    onclick={ctx.link().callback(move |_| Msg::SelectTab(tab))}
                >
                    <i class={tab.icon()}></i>{ format!(" {}", tab) }
                </button>
            })}
        </div>
    }
}

fn render_panel(panel: ReportPanel, ctx: &Context<Model>) -> Html {
    match panel {
        ReportPanel::Placeholder(placeholder) => html! {
            <div class="report-placeholder">
                <i class="fa-solid fa-file-medical fa-2x"></i>
                <p>{ placeholder.message() }</p>
            </div>
        },
        ReportPanel::Analyzing => html! {
            <div class="report-placeholder">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Analyzing scan..."}</p>
            </div>
        },
        ReportPanel::Failed(message) => html! {
            <div class="error-message report-error">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ message }</p>
            </div>
        },
        ReportPanel::Report(ReportView::Classification(report)) => {
            render_classification(&report, ctx)
        }
        ReportPanel::Report(ReportView::Confidence(bars)) => render_confidence(&bars),
    }
}

fn render_classification(report: &ClassificationReport, ctx: &Context<Model>) -> Html {
    let finding_class = match report.finding {
        Finding::Negative => "negative-finding",
        Finding::Positive => "positive-finding",
    };

    html! {
        <div class={classes!("classification", finding_class, report.severity_class)}>
            <div class="result-header">
                <i class={classes!(report.icon, "result-icon")}></i>
                <h2>{ report.heading }</h2>
            </div>
            <dl class="result-details">
                <dt>{"Prediction"}</dt>
                <dd class="result-label">{ &report.label }</dd>
                <dt>{"Confidence"}</dt>
                <dd class="result-confidence">{ &report.confidence }</dd>
            </dl>
            <p class="recommendation">
                <i class="fa-solid fa-stethoscope"></i>{ format!(" {}", report.recommendation) }
            </p>
            <button
                id="reupload-btn"
                class="analyze-btn secondary"
                onclick={ctx.link().callback(|_| Msg::Reupload)}
            >
                <i class="fa-solid fa-rotate-left"></i>{" Upload Another Scan"}
            </button>
        </div>
    }
}

fn render_confidence(bars: &[ConfidenceBar]) -> Html {
    if bars.is_empty() {
        return html! { <p class="no-results-message">{"No per-category scores were returned."}</p> };
    }

    html! {
        <div class="detailed-results">
            <h3>{"Confidence Distribution"}</h3>
            <div class="result-bars">
                { for bars.iter().map(|bar| html! {
                    <div class={classes!("result-item", bar.is_top.then_some("top-ranked"))}>
                        <div class="result-label">{ &bar.label }</div>
                        <div class="result-bar-container">
                            <div class="result-bar" style={format!("width: {}%", bar.width)}></div>
                        </div>
                        <div class="result-value">{ &bar.value }</div>
                    </div>
                })}
            </div>
        </div>
    }
}
