use crate::templates::site_layout;
use maud::{html, Markup};

pub struct LoginVm<'a> {
    pub next: &'a str,
    pub email: &'a str,
    pub error: Option<&'a str>,
}

pub fn login_page(vm: &LoginVm<'_>) -> Markup {
    site_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow block" {
                div class="card" {
                    h1 { "Welcome Back" }
                    @if let Some(msg) = vm.error {
                        p class="field-error" role="alert" { (msg) }
                    }
                    form method="post" action="/login" {
                        input type="hidden" name="next" value=(vm.next);
                        div class="field" {
                            label for="email" { "Email address" }
                            input
                                type="email"
                                id="email"
                                name="email"
                                value=(vm.email)
                                placeholder="you@domain.com"
                                autocomplete="email"
                                required;
                        }
                        div class="field" {
                            label for="password" { "Password" }
                            input
                                type="password"
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                required;
                        }
                        button type="submit" class="btn" { "Sign in" }
                    }
                }
            }
        },
    )
}
