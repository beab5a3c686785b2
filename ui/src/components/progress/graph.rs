//! Monthly bar chart of progress updates

use leptos::*;

use learnloop_shared::chart::MonthlyChart;
use learnloop_shared::{ProgressType, ProgressUpdate};

fn bar_class(kind: ProgressType) -> &'static str {
    match kind {
        ProgressType::CompletedTutorial => {
            "relative flex justify-center flex-grow bg-blue-200 hover:bg-blue-300 \
             transition-colors duration-200"
        }
        ProgressType::NewSkillLearned => {
            "relative flex justify-center flex-grow bg-green-200 hover:bg-green-300 \
             transition-colors duration-200"
        }
        ProgressType::InProgress => {
            "relative flex justify-center flex-grow bg-orange-200 hover:bg-orange-300 \
             transition-colors duration-200"
        }
    }
}

fn legend_swatch(kind: ProgressType) -> &'static str {
    match kind {
        ProgressType::CompletedTutorial => "block w-4 h-4 bg-blue-200",
        ProgressType::NewSkillLearned => "block w-4 h-4 bg-green-200",
        ProgressType::InProgress => "block w-4 h-4 bg-orange-200",
    }
}

fn legend_label(kind: ProgressType) -> &'static str {
    match kind {
        ProgressType::CompletedTutorial => "Completed",
        ProgressType::NewSkillLearned => "New Skills",
        ProgressType::InProgress => "In Progress",
    }
}

#[component]
pub fn ProgressGraph(updates: Vec<ProgressUpdate>) -> impl IntoView {
    let chart = MonthlyChart::build(&updates);
    if chart.months.is_empty() {
        return ().into_view();
    }

    let axis = chart
        .axis_labels()
        .into_iter()
        .map(|label| view! { <span>{label}</span> })
        .collect::<Vec<_>>();

    let bars = chart
        .months
        .iter()
        .map(|bucket| {
            let columns = ProgressType::ALL
                .into_iter()
                .map(|kind| {
                    let height = format!("{:.1}%", chart.height_pct(bucket.count(kind)));
                    view! { <div class=bar_class(kind) style:height=height></div> }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="relative flex flex-col items-center flex-grow pb-5">
                    <div class="flex items-end w-full h-40">{columns}</div>
                    <span class="absolute bottom-0 text-xs font-bold text-gray-700">
                        {bucket.month.clone()}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="flex flex-col items-center w-full p-6 bg-white rounded-lg shadow-md">
            <h2 class="text-xl font-bold text-gray-800">"Learning Progress"</h2>
            <div class="flex w-full mt-4 justify-center">
                <div class="flex flex-col-reverse justify-between h-40 mr-2 text-xs text-gray-500">
                    {axis}
                </div>
                <div class="flex items-end flex-grow w-full space-x-2">{bars}</div>
            </div>
            <div class="flex w-full mt-4 justify-center">
                {ProgressType::ALL
                    .into_iter()
                    .map(|kind| view! {
                        <div class="flex items-center ml-4">
                            <span class=legend_swatch(kind)></span>
                            <span class="ml-1 text-xs font-medium text-gray-700">
                                {legend_label(kind)}
                            </span>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_view()
}
