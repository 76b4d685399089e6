use leptos::prelude::*;

use crate::state::Msg;
use crate::store::Store;
use crate::view_model::{ComparisonColumn, ComparisonTable, ComparisonView, ROW_LABELS};

fn price_cell(col: &ComparisonColumn, index: usize) -> impl IntoView {
    let price = col.prices.get(index).cloned();
    view! {
        <td>
            {price.map(|p| {
                let class = p.class();
                view! {
                    <span class=class>{p.price_text}</span>
                    {p.after_coupon_text.map(|t| view! { <small class="after-coupon">{t}</small> })}
                    {p.coupon.map(|c| view! { <small class="coupon-code">{c}</small> })}
                    {p.buy_url.map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener" class="buy-link">
                                {format!("Buy on {}", p.platform.label())}
                            </a>
                        }
                    })}
                }
            })}
        </td>
    }
}

/// `row` indexes [`ROW_LABELS`].
fn metric_row(row: usize, table: &ComparisonTable) -> impl IntoView {
    let label = ROW_LABELS[row];
    let cells = table
        .columns
        .iter()
        .map(|col| match row {
            0 | 1 => price_cell(col, row).into_any(),
            2 => view! {
                <td>
                    <span class="best-platform">{col.best_platform.clone()}</span>
                    {col.coupon_summary.clone().map(|s| view! { <small class="coupon-summary">{s}</small> })}
                </td>
            }
            .into_any(),
            _ => view! {
                <td>
                    <span class=col.difference_class>{col.difference_text.clone()}</span>
                    <small class="savings-hint">{col.savings_hint.clone()}</small>
                </td>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <th scope="row">{label}</th>
            {cells}
        </tr>
    }
}

fn comparison_table(table: ComparisonTable) -> impl IntoView {
    let headers = table
        .columns
        .iter()
        .map(|col| {
            view! {
                <th scope="col">
                    <img class="compare-thumb" src={col.image.clone()} alt={col.name.clone()} />
                    <div class="compare-name">{col.name.clone()}</div>
                    <small class="compare-brand">{col.brand.clone()}</small>
                </th>
            }
        })
        .collect::<Vec<_>>();
    let rows = (0..ROW_LABELS.len())
        .map(|row| metric_row(row, &table))
        .collect::<Vec<_>>();

    view! {
        {table.overall_best.clone().map(|name| {
            view! { <p class="overall-best">"Overall best deal: " <strong>{name}</strong></p> }
        })}
        <div class="table-responsive">
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th scope="col">"Product"</th>
                        {headers}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ComparisonModal() -> impl IntoView {
    let store = expect_context::<Store>();

    let view_model =
        Memo::new(move |_| store.with_config(|config| store.with(|s| s.comparison_view(config))));
    let open = move || view_model.with(Option::is_some);
    let close = move |_| store.dispatch(Msg::CloseComparison);

    view! {
        <Show when=open>
            <div class="modal-backdrop" on:click=close></div>
            <div class="modal comparison-modal" role="dialog">
                <div class="modal-header">
                    <h2 class="modal-title">"Price Comparison"</h2>
                    <button class="btn-close" title="Close" on:click=close>"x"</button>
                </div>
                <div class="modal-body">
                    {move || match view_model.get() {
                        Some(ComparisonView::Table(table)) => comparison_table(table).into_any(),
                        Some(ComparisonView::Nothing(text)) => {
                            view! { <p class="nothing-to-compare">{text}</p> }.into_any()
                        }
                        None => ().into_any(),
                    }}
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=close>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
