use yew::prelude::*;

use crate::components::fade_section::FadeSection;
use crate::components::nav::NavBar;
use crate::config::{
    TrackerConfig, ABUSEIPDB_URL, API_KEY_POPUP_PATH, CLONE_TUTORIAL_URL,
    EXTENSION_SCREENSHOT_PATH, LOGO_PATH, REPOSITORY_URL,
};
use crate::scroll::browser::WindowScroll;
use crate::scroll::hook::use_scroll_tracker;
use crate::scroll::section::{Section, SectionId};

const HOME: &str = "section1";
const ABOUT: &str = "section2";
const SETUP: &str = "section3";
const FINAL_STEP: &str = "section4";

const PAGE_CSS: &str = r#"
    .phishmate-page {
        position: relative;
        color: #000;
        background: #fff;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.85);
        backdrop-filter: blur(4px);
    }
    .nav-content {
        display: flex;
        height: 4rem;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo img {
        width: 2.5rem;
        height: 2.5rem;
        margin-left: 5rem;
    }
    .nav-links {
        display: flex;
        gap: 2.5rem;
        margin-right: 1.25rem;
        list-style: none;
    }
    .nav-link {
        background: none;
        border: none;
        font-size: 1.1rem;
        font-weight: 600;
        cursor: pointer;
        color: #000;
        transition: color 0.2s ease;
    }
    .nav-link:hover,
    .nav-link.active {
        color: #f97316;
    }
    .page-section {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 4rem 1.5rem 0;
    }
    .page-section.muted {
        background: #f4f4f5;
    }
    .fade-in {
        transition: opacity 1s ease-out, transform 1s ease-out;
    }
    .fade-in.hidden {
        opacity: 0;
        transform: translateY(2.5rem);
    }
    .fade-in.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .section-grid {
        display: grid;
        gap: 3rem;
        grid-template-columns: 1fr 1fr;
        align-items: center;
        max-width: 72rem;
    }
    .hero-content {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        gap: 2rem;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 700;
    }
    .hero-buttons {
        display: flex;
        gap: 1rem;
    }
    .hero-button {
        display: inline-flex;
        align-items: center;
        gap: 0.4rem;
        height: 2.5rem;
        padding: 0 2rem;
        border-radius: 0.375rem;
        background: #fdba74;
        color: #000;
        text-decoration: none;
    }
    .scroll-hint {
        position: absolute;
        bottom: 2rem;
        background: none;
        border: none;
        font-size: 2rem;
        cursor: pointer;
        animation: bounce 1s infinite;
    }
    .inline-link {
        color: #f97316;
        text-decoration: underline;
    }
    .site-footer {
        border-top: 1px solid #e4e4e7;
        padding: 2rem 0;
        text-align: center;
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }
    @media (max-width: 768px) {
        .nav-logo img {
            margin-left: 1.25rem;
        }
        .nav-links {
            gap: 0.5rem;
        }
        .nav-link {
            font-size: 0.875rem;
        }
        .section-grid {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 2.25rem;
        }
        .hero-buttons {
            flex-direction: column;
        }
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let home_ref = use_node_ref();
    let about_ref = use_node_ref();
    let setup_ref = use_node_ref();
    let final_ref = use_node_ref();

    // The final step has no label, so it only shows up by scrolling.
    let tracker = use_scroll_tracker(
        Section::new(HOME, home_ref.clone()).with_label("Home 🏡"),
        vec![
            Section::new(ABOUT, about_ref.clone()).with_label("About Us 🐟"),
            Section::new(SETUP, setup_ref.clone()).with_label("Setting Up 🧑🏻‍💻"),
            Section::new(FINAL_STEP, final_ref.clone()),
        ],
        TrackerConfig::default(),
    );

    let scroll_to = {
        let tracker = tracker.clone();
        Callback::from(move |id: SectionId| {
            tracker.scroll_to_section(id.as_str(), &WindowScroll);
        })
    };

    let scroll_to_about = {
        let scroll_to = scroll_to.clone();
        Callback::from(move |_: MouseEvent| scroll_to.emit(SectionId::from(ABOUT)))
    };

    html! {
        <div class="phishmate-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{PAGE_CSS}</style>
            <NavBar
                entries={tracker.nav_entries()}
                active={tracker.active_section().clone()}
                on_select={scroll_to}
            />

            <FadeSection id={SectionId::from(HOME)} node_ref={home_ref} visible={tracker.is_visible(HOME)}>
                <div class="hero-content">
                    <img src={LOGO_PATH} alt="PhishMate logo" width="160" />
                    <h1 class="hero-title">{"PhishMate"}</h1>
                    <p>
                        {"Your friendly neighbourhood phishing mail detector."}<br/>
                        {"100% Open Source, and on-device (no data collected)."}
                    </p>
                    <div class="hero-buttons">
                        <a href={REPOSITORY_URL} target="_blank" rel="noopener noreferrer" class="hero-button">
                            <i class="fa-brands fa-github"></i>{"Github"}
                        </a>
                        <a href="#" class="hero-button">
                            <i class="fa-solid fa-download"></i>{"Download"}
                        </a>
                    </div>
                    <div>{"(Coming soon!)"}</div>
                    <button class="scroll-hint" aria-label="Scroll down" onclick={scroll_to_about}>
                        <i class="fa-solid fa-chevron-down"></i>
                    </button>
                </div>
            </FadeSection>

            <FadeSection id={SectionId::from(ABOUT)} node_ref={about_ref} visible={tracker.is_visible(ABOUT)} class="muted">
                <div class="section-grid">
                    <div>
                        <h2>{"What is PhishMate?"}</h2>
                        <p>
                            {"PhishMate is a fully open source and on device phishing mail detector. We use a fine-tuned BERT sequential model for text analysis \
                            and link extraction along with AbuseIPDB to check the reputation of links sent in your email. Available for Chrome based browsers only."}
                        </p>
                        <p>
                            {"For contributions, check out our "}
                            <a href={REPOSITORY_URL} target="_blank" rel="noopener noreferrer" class="inline-link">{"GitHub"}</a>
                            {". For the installation guide, keep scrolling."}
                        </p>
                    </div>
                    <div>
                        <img src={LOGO_PATH} alt="PhishMate" />
                    </div>
                </div>
            </FadeSection>

            <FadeSection id={SectionId::from(SETUP)} node_ref={setup_ref} visible={tracker.is_visible(SETUP)}>
                <div class="section-grid">
                    <div>
                        <img src={EXTENSION_SCREENSHOT_PATH} alt="PhishMate in the Chrome extensions list" />
                    </div>
                    <div>
                        <h2>{"Setting up PhishMate"}</h2>
                        <p>
                            <b>{"One Way"}</b>
                            {" to set up PhishMate is to directly clone the repository, the other way is by clicking the download button on the HomePage. \
                            If you are going to download it, make sure you unzip the files in a folder before continuing."}
                            <br/>
                            {"("}<b>{"Note:"}</b>{" Download feature coming soon, check "}
                            <a href={CLONE_TUTORIAL_URL} target="_blank" rel="noopener noreferrer" class="inline-link">{"this tutorial"}</a>
                            {" by GitHub on how to clone a repository :)"}
                        </p>
                        <p>
                            <b>{"Once you have downloaded/cloned the files into a folder"}</b>{", go to"}<br/>
                            {"Chrome > Extensions "}<i class="fa-solid fa-puzzle-piece"></i>
                            {" > Manage Extensions > Turn on developer mode (top right) > Load unpacked"}
                        </p>
                        <p>
                            {"Now, choose the folder where you have cloned/downloaded the project. PhishMate should now be visible in the list of extensions. \
                            Turn it on. Scroll down for the next step!"}
                        </p>
                    </div>
                </div>
            </FadeSection>

            <FadeSection id={SectionId::from(FINAL_STEP)} node_ref={final_ref} visible={tracker.is_visible(FINAL_STEP)} class="muted">
                <div class="section-grid">
                    <div>
                        <h2>{"Final Step!"}</h2>
                        <p>
                            {"For the final step, click on Extensions in the top right and click on PhishMate. Once that is done, a popup will appear with a dashboard \
                            that says how many links and emails were tracked. You should find a key symbol on the top left. Clicking that will prompt you to a popup \
                            shown in the figure."}
                        </p>
                        <p>
                            {"Go to "}
                            <a href={ABUSEIPDB_URL} target="_blank" rel="noopener noreferrer" class="inline-link">{"AbuseIPDB's Website"}</a>
                            {" and get yourself an API key. Once that is done, copy the api key and paste it in the box."}
                        </p>
                        <p>{"Thats all! You can now safely browse your mails with the added safety of our extension."}</p>
                    </div>
                    <div>
                        <img src={API_KEY_POPUP_PATH} alt="API key popup" />
                    </div>
                </div>
            </FadeSection>

            <footer class="site-footer">
                <p>{"Made With ❤️ by Keerthi and Aravind"}</p>
            </footer>
        </div>
    }
}
