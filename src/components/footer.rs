use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::BRAND;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let email = config::contact_email();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span class="footer-brand">{BRAND}</span>
                <a href={format!("mailto:{}", email)} class="footer-link">{email}</a>
                <span class="footer-copy">{format!("© {} {}. All rights reserved.", year, BRAND)}</span>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 2.5rem 2rem;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: space-between;
                    align-items: center;
                }
                .footer-brand {
                    font-weight: 700;
                    color: #fff;
                }
                .footer-link {
                    color: #a78bfa;
                    text-decoration: none;
                }
                "#}
            </style>
        </footer>
    }
}
