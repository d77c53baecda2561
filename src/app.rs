mod achievements;
mod contact;
mod footer;
mod homepage;
mod navigation;
mod projects;
mod reveal;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use toast::{provide_toaster, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toaster();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name) />
        <Meta name="description" content=PROFILE.title />

        <Router>
            <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
                <div class="page-grid fixed inset-0 pointer-events-none" />
                <Navigation />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <Toaster />
            </div>
        </Router>
    }
}
