//! Pharmaceutical HS code reference table.

use leptos::prelude::*;

use crate::content::catalog::{HS_CODE_COLUMNS, HS_CODES};

#[component]
pub fn HsCodeTable() -> impl IntoView {
    view! {
        <section id="pharmaceutical" class="section section--white">
            <div class="container">
                <h2 class="section__title">"Pharmaceutical Products"</h2>
                <div class="card hs-table">
                    <table class="hs-table__table">
                        <thead>
                            <tr class="hs-table__head">
                                {HS_CODE_COLUMNS.iter().map(|col| view! { <th>{*col}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {HS_CODES
                                .iter()
                                .map(|row| {
                                    view! {
                                        <tr class="hs-table__row">
                                            <td class="hs-table__code">{row.code}</td>
                                            <td>{row.category}</td>
                                            <td>{row.description}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}
