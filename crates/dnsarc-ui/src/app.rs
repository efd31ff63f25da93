use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Outlet, ParentRoute, Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::account::AccountPage;
use crate::pages::auth::AuthPage;
use crate::pages::dash_home::DashHomePage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::zone::ZonePage;
use crate::pages::zones::ZonesPage;
use crate::query::provide_query_client;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_query_client();

    view! {
        <Stylesheet id="leptos" href="/pkg/dnsarc-console.css" />
        <Title text="DNSARC" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("auth") view=AuthPage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <ParentRoute path=StaticSegment("dash") view=DashLayout>
                        <Route path=StaticSegment("") view=DashHomePage />
                        <Route path=StaticSegment("zones") view=ZonesPage />
                        <Route path=(StaticSegment("zone"), ParamSegment("name")) view=ZonePage />
                        <Route path=StaticSegment("account") view=AccountPage />
                    </ParentRoute>
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn DashLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}
