use leptos::prelude::*;

use crate::content::{
    Degree, EDUCATION, GITHUB_URL, HERO_STATS, OWNER_NAME, PROJECTS, Project, SKILL_GROUPS,
    SkillGroup, Stat, VALUES,
};

#[component]
fn Hero() -> impl IntoView {
    let stat = |s: &'static Stat| {
        // multi-line values get a <br/> between lines
        let value = s
            .value
            .iter()
            .enumerate()
            .map(|(i, line)| view! { { (i > 0).then(|| view! { <br/> }) } { *line } })
            .collect_view();

        view! {
            <div class="stat">
                <span class="stat__value">{ value }</span>
                <span class="stat__label">{ s.label }</span>
            </div>
        }
    };

    view! {
        <section id="hero" class="hero" aria-label="Introduction">
            <div class="hero__content">
                <p class="hero__eyebrow">"Full-Stack MERN Developer"</p>
                <h1 class="hero__title">
                    "Dawit Abrha "<span>"Weldegebriel"</span>
                </h1>
                <p class="hero__subtitle">
                    "Electrical and Computer Engineer crafting modern web experiences with the MERN stack."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#projects">"View Projects"</a>
                    <a class="btn btn--ghost" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
            <aside class="hero__side">
                <figure class="hero__portrait">
                    <img
                        src="/dawit-abrha-weldegebriel.jpg"
                        alt=format!("{OWNER_NAME} smiling in the sunlight")
                    />
                </figure>
                <div class="hero__stats" aria-label="Highlights">
                    { HERO_STATS.iter().map(stat).collect_view() }
                </div>
            </aside>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let values = VALUES
        .iter()
        .map(|v| view! { <li><strong>{ v.name }</strong>" "{ v.detail }</li> })
        .collect_view();

    view! {
        <section id="about" class="section section--light">
            <div class="section__inner">
                <div class="section__header">
                    <h2>"About"</h2>
                    <p>
                        "I translate complex ideas into reliable digital products. With a strong grounding in "
                        "Electrical and Computer Engineering, I bring systems-level thinking to full-stack web "
                        "development, building solutions that are robust, scalable, and user-centered."
                    </p>
                </div>
                <div class="about__grid">
                    <div class="about__card">
                        <h3>"Who I Am"</h3>
                        <p>
                            "I am a builder at heart—equally at home architecting APIs, crafting responsive interfaces, "
                            "and solving infrastructure challenges. Curiosity keeps me exploring new technologies while "
                            "discipline ensures every project ships with quality."
                        </p>
                    </div>
                    <div class="about__card">
                        <h3>"What I Value"</h3>
                        <ul>{ values }</ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    let item = |d: &'static Degree| {
        view! {
            <article class="timeline__item">
                <div class="timeline__marker"></div>
                <div class="timeline__content">
                    <h3>{ d.title }</h3>
                    <p class="timeline__institution">{ d.institution }</p>
                    <p>{ d.summary }</p>
                </div>
            </article>
        }
    };

    view! {
        <section id="education" class="section">
            <div class="section__inner">
                <div class="section__header">
                    <h2>"Education"</h2>
                    <p>"Engineering foundations combined with modern software craftsmanship."</p>
                </div>
                <div class="timeline">
                    { EDUCATION.iter().map(item).collect_view() }
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let group = |g: &'static SkillGroup| {
        view! {
            <div class="skills__group">
                <h3>{ g.name }</h3>
                <ul>
                    { g.skills.iter().map(|s| view! { <li>{ *s }</li> }).collect_view() }
                </ul>
            </div>
        }
    };

    view! {
        <section id="skills" class="section section--light">
            <div class="section__inner">
                <div class="section__header">
                    <h2>"Skills"</h2>
                    <p>"The tools and practices I rely on to deliver production-ready solutions."</p>
                </div>
                <div class="skills__grid">
                    { SKILL_GROUPS.iter().map(group).collect_view() }
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let live = project.live_url.map(|url| {
        view! {
            <a href=url target="_blank" rel="noopener noreferrer" class="btn btn--link">
                { project.link_label }
            </a>
        }
    });

    view! {
        <article class="project-card">
            <div class="project-card__body">
                <h3>{ project.title }</h3>
                <p>{ project.description }</p>
                <ul class="project-card__stack">
                    { project.stack.iter().map(|item| view! { <li>{ *item }</li> }).collect_view() }
                </ul>
            </div>
            <footer class="project-card__footer">
                { live }
                <a href=project.code_url target="_blank" rel="noopener noreferrer" class="btn btn--ghost">
                    { project.code_label() }
                </a>
            </footer>
        </article>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="section__inner">
                <div class="section__header">
                    <h2>"Featured Projects"</h2>
                    <p>"A snapshot of the products I've delivered for organizations and communities."</p>
                </div>
                <div class="projects__grid">
                    { PROJECTS.iter().map(|project| view! { <ProjectCard project/> }).collect_view() }
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <About/>
            <Education/>
            <Skills/>
            <Projects/>
        </main>
    }
}
