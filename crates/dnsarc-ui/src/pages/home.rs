use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <header class="landing-header">
                <div class="nav-brand">
                    <div class="brand-icon">"D"</div>
                    <span class="brand-text">"DNSARC"</span>
                </div>
                <nav class="landing-links">
                    <a href="/login" class="btn btn-ghost">"Sign In"</a>
                    <a href="/register" class="btn btn-primary">"Get Started"</a>
                </nav>
            </header>
            <main class="landing-hero">
                <h1>"DNS Management" <br /> <span class="accent">"Made Simple"</span></h1>
                <p class="subtitle">
                    "Manage domains, configure records and delegate your zones from one place."
                </p>
                <div class="landing-actions">
                    <a href="/auth" class="btn btn-primary">"Get Started"</a>
                    <a href="/login" class="btn btn-ghost">"Sign In"</a>
                </div>
                <div class="feature-grid">
                    <div class="card">
                        <h3>"Global DNS Network"</h3>
                        <p>"Fast resolution from authoritative nameservers."</p>
                    </div>
                    <div class="card">
                        <h3>"Record Management"</h3>
                        <p>"A, AAAA, CNAME, MX and TXT records with validated input."</p>
                    </div>
                    <div class="card">
                        <h3>"Instant Updates"</h3>
                        <p>"Changes are served as soon as they are saved."</p>
                    </div>
                </div>
            </main>
            <footer class="landing-footer">
                <p>"\u{00A9} DNSARC. All rights reserved."</p>
            </footer>
        </div>
    }
}
