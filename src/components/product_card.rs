use leptos::prelude::*;

use crate::state::Msg;
use crate::store::Store;
use crate::view_model::{PriceCell, ProductCard as CardModel};

#[component]
fn PriceRow(cell: PriceCell) -> impl IntoView {
    let class = format!("price-item {} {}", cell.platform.css(), cell.class());
    let label = cell.platform.label();

    let price = match cell.discounted_text.clone() {
        Some(discounted) => view! {
            <span class="price-value">
                <span class="original-price">{cell.price_text.clone()}</span>
                <span class="discounted-price">{discounted}</span>
            </span>
        }
        .into_any(),
        None => view! { <span class="price-value">{cell.price_text.clone()}</span> }.into_any(),
    };

    view! {
        <div class=class>
            <span class="platform-name">{label}</span>
            {price}
            {cell.buy_url.map(|url| {
                view! {
                    <a href=url target="_blank" rel="noopener" class="buy-link">
                        {format!("Buy on {}", label)}
                    </a>
                }
            })}
        </div>
    }
}

#[component]
pub fn ProductCard(card: CardModel) -> impl IntoView {
    let store = expect_context::<Store>();
    let name = card.key.clone();
    let checkbox_id = format!("compare-{}", card.id);

    view! {
        <div class="product-card" class:selected=card.compare.checked>
            {(!card.badges.is_empty()).then(|| {
                view! {
                    <div class="coupon-badges">
                        {card
                            .badges
                            .iter()
                            .map(|b| {
                                view! {
                                    <span class=b.css.clone() title=b.title.clone()>
                                        {b.text.clone()}
                                    </span>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}

            <div class="product-image">
                <img src={card.image.clone()} alt={card.name.clone()} loading="lazy" />
            </div>

            <div class="product-info">
                <h3 class="product-name">{card.name.clone()}</h3>
                {card.brand.clone().map(|b| view! { <p class="product-brand">{b}</p> })}
                {card
                    .coupon_lines
                    .iter()
                    .map(|line| view! { <p class="coupon-line">{line.clone()}</p> })
                    .collect::<Vec<_>>()}

                <div class="best-price-mini">
                    <span class="best-price-label">"Best price"</span>
                    <span class="best-price-value">{card.best_price_text.clone()}</span>
                </div>

                <div class="price-comparison">
                    {card
                        .prices
                        .into_iter()
                        .map(|cell| view! { <PriceRow cell=cell /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="compare-checkbox">
                    <input
                        type="checkbox"
                        id=checkbox_id.clone()
                        prop:checked=card.compare.checked
                        disabled=!card.compare.enabled
                        on:change=move |ev| {
                            store.dispatch(Msg::ToggleCompare {
                                name: name.clone(),
                                checked: event_target_checked(&ev),
                            })
                        }
                    />
                    <label for=checkbox_id>"Compare"</label>
                </div>
            </div>
        </div>
    }
}
