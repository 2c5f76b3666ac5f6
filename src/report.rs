// src/report.rs
//! Static HTML report: one collapsible section per publication date.
//!
//! Rendering is pure string building. Every value that came off the archive
//! goes through `html_escape`.

use crate::core::sanitize::html_escape;
use crate::data::{DayReport, DecisionRecord};

pub const COLUMNS: [&str; 12] = [
    "Verfahrensnummer",
    "Entscheiddatum",
    "Abteilung",
    "Rechtsgebiet",
    "Betreff",
    "Ausgang",
    "Gewichtung",
    "Länge (Wörter)",
    "Richter:innen",
    "Gerichtsschreiber:in",
    "Minderheitsvotum",
    "Link",
];

const STYLE: &str = r#"<style>
  :root{--bg:#0b0f19;--panel:#111727;--muted:#9aa3b2;--text:#e8ecf1;--accent:#4da3ff;}
  body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Inter,Arial,sans-serif;background:var(--bg);color:var(--text);}
  header{padding:24px 16px;text-align:center;}
  h1{margin:0 0 8px 0;font-size:1.6rem;}
  .sub{color:var(--muted);font-size:.95rem}
  .wrap{max-width:1900px;margin:0 auto;padding:0 16px 56px}
  .day{background:var(--panel);border-radius:16px;padding:16px 16px 8px;margin:16px 0;box-shadow:0 10px 30px rgba(0,0,0,.25)}
  .day summary{cursor:pointer;list-style:none}
  .day h2{display:inline;margin:4px 0 12px 0;font-size:1.2rem;color:#fff}
  .day .count{color:var(--muted);margin-left:8px}
  .toolbar{display:flex;gap:12px;align-items:center;justify-content:space-between;margin:8px 0 12px}
  .toolbar input{background:#0b1322;color:var(--text);border:1px solid #203a5c;border-radius:8px;padding:6px 10px;min-width:260px}
  table{width:100%;border-collapse:collapse;font-size:.95rem}
  th,td{padding:10px 8px;vertical-align:top;border-top:1px solid #1c2740}
  th{position:sticky;top:0;background:#121a2d;text-align:left;cursor:pointer;user-select:none}
  tr:hover{background:#0f1728}
  .pill{display:inline-block;padding:2px 8px;border-radius:999px;background:#0e233a;color:#b9d8ff;border:1px solid #203a5c;font-size:.85rem}
  .dissent{color:#ffb454;font-weight:600}
  a{color:var(--accent);text-decoration:none}
  a:hover{text-decoration:underline}
  .empty{color:var(--muted);padding:8px 0}
  footer{color:var(--muted);text-align:center;padding:24px}
  table td:nth-child(3), table th:nth-child(3) { width: 150px; }
  table td:nth-child(9), table th:nth-child(9) { width: 300px; }
  table td:nth-child(10), table th:nth-child(10) { width: 150px; }
</style>"#;

const SCRIPT: &str = r#"<script>
function filterTable(dayId){
  const q = document.getElementById('q_'+dayId).value.toLowerCase();
  const rows = document.querySelectorAll('#tbl_'+dayId+' tbody tr');
  rows.forEach(tr=>{
    const text = tr.innerText.toLowerCase();
    tr.style.display = text.indexOf(q) !== -1 ? '' : 'none';
  });
}
function sortTable(dayId, col){
  const table = document.getElementById('tbl_'+dayId);
  const body = table.tBodies[0];
  const asc = table.dataset.sortCol == col ? table.dataset.sortDir !== 'asc' : true;
  const rows = Array.from(body.rows);
  const key = tr => tr.cells[col].innerText.trim();
  rows.sort((a,b)=>{
    const x = key(a), y = key(b);
    const nx = parseFloat(x), ny = parseFloat(y);
    const c = (!isNaN(nx) && !isNaN(ny)) ? nx - ny : x.localeCompare(y, 'de');
    return asc ? c : -c;
  });
  rows.forEach(tr => body.appendChild(tr));
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
}
</script>"#;

const FOOTER: &str = "<footer>Die vorliegende Website ist ein privates Projekt und wird nicht vom Verwaltungsgericht Zürich geführt.</footer>";

/// Render the whole report. `generated_at` is shown verbatim in the header.
pub fn render(days: &[DayReport], generated_at: &str) -> String {
    let n = days.len();
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(&format!(
        r#"<!doctype html>
<html lang="de">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>VG Zürich – Veröffentlichte Entscheide (letzte {n} Tage)</title>
{STYLE}
{SCRIPT}
</head>
<body>
<header>
  <h1>Veröffentlichte Entscheide – Verwaltungsgericht Zürich</h1>
  <div class="sub">Letzte {n} Publikationstage • Aktualisiert: {ts}</div>
</header>
<div class="wrap">
"#,
        ts = html_escape(generated_at),
    ));

    for (i, day) in days.iter().enumerate() {
        out.push_str(&render_day(i + 1, day));
    }

    out.push_str("</div>\n");
    out.push_str(FOOTER);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn render_day(idx: usize, day: &DayReport) -> String {
    let date = html_escape(&day.date_label());
    let head = format!(
        r#"<details class="day" open><summary><h2>Publikationen am {date}</h2><span class="count">({})</span></summary>"#,
        day.records.len()
    );

    if day.is_empty() {
        return format!("{head}\n<div class=\"empty\">Keine Entscheide publiziert.</div>\n</details>\n");
    }

    let headers: String = COLUMNS
        .iter()
        .enumerate()
        .map(|(col, h)| format!(r#"<th onclick="sortTable({idx},{col})">{}</th>"#, html_escape(h)))
        .collect();
    let rows: String = day.records.iter().map(render_row).collect();

    format!(
        r#"{head}
<div class="toolbar"><input id="q_{idx}" type="search" placeholder="Filtern…" oninput="filterTable({idx})"></div>
<table id="tbl_{idx}"><thead><tr>{headers}</tr></thead><tbody>
{rows}</tbody></table>
</details>
"#
    )
}

fn render_row(r: &DecisionRecord) -> String {
    let cell = |v: Option<&str>| format!("<td>{}</td>", html_escape(v.unwrap_or("")));

    let weight = r.weight.map(|w| w.to_string());
    let length = r.length_words.map(|n| n.to_string());
    let judges = r.judges.join(", ");
    let dissent = if r.has_dissent { r#"<td class="dissent">Ja!</td>"# } else { "<td></td>" };
    let link = if r.source_url.is_empty() {
        "<td></td>".to_string()
    } else {
        format!(r#"<td><a href="{}" target="_blank">Link</a></td>"#, html_escape(&r.source_url))
    };

    let mut row = String::from(r#"<tr class="rec">"#);
    row.push_str(&cell(r.case_number.as_deref()));
    row.push_str(&cell(r.decision_date.as_deref()));
    row.push_str(&cell(Some(r.section.as_str())));
    row.push_str(&cell(r.legal_area.as_deref()));
    row.push_str(&cell(r.subject.as_deref()));
    row.push_str(&format!(r#"<td><span class="pill">{}</span></td>"#, html_escape(r.outcome.label())));
    row.push_str(&cell(weight.as_deref()));
    row.push_str(&cell(length.as_deref()));
    row.push_str(&cell(Some(judges.as_str())));
    row.push_str(&cell(r.clerk.as_deref()));
    row.push_str(dissent);
    row.push_str(&link);
    row.push_str("</tr>\n");
    row
}
