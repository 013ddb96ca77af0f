use crate::models::{is_color_token, Mood, ViewResponse};
use crate::view::NO_DATA_COLOR;

/// Renders the page. `notice` is shown as an error in the status line.
pub fn render_index(view: &ViewResponse, notice: Option<&str>) -> String {
    let (status, status_type) = match notice {
        Some(message) => (message, "error"),
        None => ("", ""),
    };
    INDEX_HTML
        .replace("{{TODAY}}", &view.today.format("%A, %B %-d").to_string())
        .replace("{{STATUS_TYPE}}", status_type)
        .replace("{{STATUS}}", status)
        .replace("{{BUTTONS}}", &render_buttons())
        .replace("{{TIMELINE}}", &render_timeline(view))
        .replace("{{COUNTS}}", &render_counts(view))
}

fn render_buttons() -> String {
    Mood::ALL
        .into_iter()
        .map(|mood| {
            format!(
                r#"<form method="post" action="/mood/{name}"><button class="mood-btn" type="submit" data-mood="{name}" style="--mood: {color}"><span class="emoji">{emoji}</span>{label}</button></form>"#,
                name = mood.as_str(),
                color = mood.color(),
                emoji = mood.emoji(),
                label = mood.display_name(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_timeline(view: &ViewResponse) -> String {
    view.timeline
        .iter()
        .map(|day| {
            format!(
                r#"<div class="timeline-day"><div class="timeline-dot" title="{title}" style="background-color: {color}"></div><span class="timeline-date">{short}</span></div>"#,
                title = day.label,
                color = if is_color_token(&day.color) { day.color.as_str() } else { NO_DATA_COLOR },
                short = day.short_label,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_counts(view: &ViewResponse) -> String {
    view.counts
        .iter()
        .map(|(mood, count)| {
            format!(
                r#"<div class="stat"><span class="label">{emoji} {label}</span><span id="{name}-count" class="value">{count}</span></div>"#,
                emoji = mood.emoji(),
                label = mood.display_name(),
                name = mood.as_str(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .moods form {
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      gap: 8px;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.96);
    }

    .mood-btn {
      background: var(--mood);
      color: var(--ink);
    }

    .emoji {
      font-size: 1.4rem;
    }

    .timeline {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
      text-align: center;
    }

    .timeline-dot {
      width: 34px;
      height: 34px;
      border-radius: 50%;
      margin: 0 auto 6px;
      border: 2px solid white;
      box-shadow: 0 4px 10px rgba(47, 72, 88, 0.15);
    }

    .timeline-date {
      font-size: 0.8rem;
      color: #7a746d;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 14px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .btn-reset {
      background: var(--accent-2);
      color: white;
    }

    .status {
      min-height: 1.2em;
      color: #2d7a4b;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>How are you feeling?</h1>
      <p class="subtitle">{{TODAY}}</p>
    </header>

    <section class="moods">
        {{BUTTONS}}
    </section>
    <div id="status" class="status" data-type="{{STATUS_TYPE}}">{{STATUS}}</div>

    <section>
      <h2>Last 7 days</h2>
      <div id="timeline" class="timeline">
        {{TIMELINE}}
      </div>
    </section>

    <section>
      <h2>This week</h2>
      <div class="panel">
        {{COUNTS}}
      </div>
    </section>

    <form id="reset-form" method="post" action="/reset">
      <button class="btn-reset" type="submit">Reset data</button>
    </form>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const timelineEl = document.getElementById('timeline');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type;
    };

    const renderView = (view) => {
      timelineEl.innerHTML = '';
      view.timeline.forEach((day) => {
        const dayDiv = document.createElement('div');
        dayDiv.className = 'timeline-day';
        const dot = document.createElement('div');
        dot.className = 'timeline-dot';
        dot.style.backgroundColor = day.color;
        dot.title = day.label;
        const dateSpan = document.createElement('span');
        dateSpan.className = 'timeline-date';
        dateSpan.textContent = day.short_label;
        dayDiv.appendChild(dot);
        dayDiv.appendChild(dateSpan);
        timelineEl.appendChild(dayDiv);
      });
      Object.entries(view.counts).forEach(([mood, count]) => {
        document.getElementById(`${mood}-count`).textContent = count;
      });
    };

    const refresh = async () => {
      const res = await fetch('/api/view');
      if (!res.ok) {
        throw new Error('Unable to load moods');
      }
      renderView(await res.json());
    };

    const logMood = async (mood) => {
      const res = await fetch('/api/mood', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      const body = await res.json();
      await refresh();
      if (body.warning) {
        setStatus(`Logged, but not saved: ${body.warning}`, 'error');
      } else {
        setStatus('Mood logged for today! 🎉', 'ok');
      }
    };

    document.querySelectorAll('.mood-btn').forEach((btn) => {
      btn.addEventListener('click', (event) => {
        event.preventDefault();
        logMood(btn.dataset.mood).catch((err) => setStatus(err.message, 'error'));
      });
    });

    const resetData = async () => {
      const res = await fetch('/api/reset', { method: 'POST' });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      const body = await res.json();
      renderView(body.view);
      if (body.warning) {
        setStatus(`Cleared, but not saved: ${body.warning}`, 'error');
      } else {
        setStatus('All mood data cleared.', 'ok');
      }
    };

    document.getElementById('reset-form').addEventListener('submit', (event) => {
      event.preventDefault();
      if (confirm('Are you sure you want to reset all mood data?')) {
        resetData().catch((err) => setStatus(err.message, 'error'));
      }
    });
  </script>
</body>
</html>
"#;
