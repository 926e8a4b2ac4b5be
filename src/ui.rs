use crate::chart::escape;
use crate::profile::{Profile, Role};
use std::fmt::Write;

pub fn render_index(profile: &Profile, chart_svg: &str) -> String {
    INDEX_HTML
        .replace("{{NAME}}", &escape(profile.name))
        .replace("{{HEADLINE}}", &escape(profile.headline))
        .replace("{{LINKS}}", &render_links(profile))
        .replace("{{ABOUT}}", &escape(profile.about))
        .replace("{{EXPERIENCE}}", &render_experience(profile.experience))
        .replace("{{SKILLS}}", &render_skills(profile))
        .replace("{{CHART}}", chart_svg)
}

fn render_links(profile: &Profile) -> String {
    let mut html = String::new();
    for link in profile.links {
        let _ = write!(
            html,
            r#"<a class="contact" href="{}">{}</a>"#,
            escape(link.href),
            link.kind.label()
        );
    }
    html
}

fn render_experience(roles: &[Role]) -> String {
    let mut html = String::new();
    for role in roles {
        let _ = write!(
            html,
            r#"<div class="role"><h3>{}</h3><p class="meta">{} &bull; {}</p><ul>"#,
            escape(role.title),
            escape(role.company),
            escape(role.period)
        );
        for item in role.highlights {
            let _ = write!(html, "<li>{}</li>", escape(item));
        }
        html.push_str("</ul></div>");
    }
    html
}

fn render_skills(profile: &Profile) -> String {
    let mut html = String::new();
    for group in profile.skills {
        let _ = write!(
            html,
            r#"<div class="skill"><h3>{}</h3><p>{}</p></div>"#,
            escape(group.category),
            escape(group.items)
        );
    }
    html
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{NAME}}</title>
  <style>
    :root {
      --gold: #facc15;
      --gold-deep: #ca8a04;
      --text: #d1d5db;
      --muted: #9ca3af;
      --panel: rgba(30, 58, 138, 0.3);
      --panel-strong: rgba(30, 58, 138, 0.5);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(to bottom right, #1e3a8a, #000000);
      color: white;
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    .container {
      max-width: 1200px;
      margin: 0 auto;
      padding: 32px 16px;
      display: grid;
      grid-template-columns: 1fr;
      gap: 32px;
    }

    @media (min-width: 1024px) {
      .container {
        grid-template-columns: 2fr 1fr;
      }
    }

    .main {
      display: grid;
      gap: 32px;
    }

    h1 {
      font-size: 2.25rem;
      margin: 0;
      background: linear-gradient(to right, var(--gold), var(--gold-deep));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    h2 {
      color: var(--gold);
      font-size: 1.5rem;
      margin: 0 0 16px;
    }

    h3 {
      margin: 0;
    }

    .headline {
      font-size: 1.25rem;
      color: var(--text);
    }

    .contacts {
      display: flex;
      gap: 16px;
    }

    .contact {
      color: var(--gold);
      text-decoration: none;
    }

    .contact:hover {
      color: #fde047;
    }

    p,
    li {
      color: var(--text);
    }

    .role {
      margin-bottom: 24px;
    }

    .role .meta {
      color: var(--muted);
      margin: 4px 0;
    }

    .skills {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .skill {
      background: var(--panel);
      padding: 12px;
      border-radius: 8px;
    }

    .skill h3 {
      color: var(--gold);
      font-size: 1rem;
    }

    .analytics {
      background: var(--panel-strong);
      padding: 24px;
      border-radius: 8px;
      align-self: start;
    }

    .chart {
      width: 100%;
      height: 400px;
      display: block;
    }
  </style>
</head>
<body>
  <div class="container">
    <div class="main">
      <header>
        <h1>{{NAME}}</h1>
        <p class="headline">{{HEADLINE}}</p>
        <nav class="contacts">{{LINKS}}</nav>
      </header>

      <section>
        <h2>About Me</h2>
        <p>{{ABOUT}}</p>
      </section>

      <section>
        <h2>Experience</h2>
        {{EXPERIENCE}}
      </section>

      <section>
        <h2>Skills</h2>
        <div class="skills">{{SKILLS}}</div>
      </section>
    </div>

    <aside class="analytics">
      <h2>Visitor Analytics</h2>
      {{CHART}}
    </aside>
  </div>
</body>
</html>
"#;
