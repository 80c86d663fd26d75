use crate::render::page::PageData;

/// Render the form page as one HTML file with the page data inlined.
///
/// The markup is a fixed template with a single `__DATA__` slot; the script
/// builds the option list and the form from that data in the browser.
pub fn render_html_page(data: &PageData<'_>) -> anyhow::Result<String> {
    // "</" would let a string inside the JSON close the <script> element early.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>API form</title>
<style>
  :root { --line: #d9dde3; --soft: #f5f7fa; --ink: #1f2933; --dim: #6b7480; }
  * { box-sizing: border-box; }
  body { margin: 0; color: var(--ink); font: 14px/1.4 system-ui, sans-serif; }
  .topbar { display: flex; align-items: baseline; gap: 12px; padding: 10px 16px; border-bottom: 1px solid var(--line); }
  .layout { display: grid; grid-template-columns: 440px 1fr; height: calc(100vh - 44px); }
  .picker { display: flex; flex-direction: column; gap: 8px; padding: 12px; border-right: 1px solid var(--line); }
  .picker input { padding: 6px 8px; border: 1px solid var(--line); border-radius: 4px; }
  .picker select { flex: 1; font: 12px/1.5 ui-monospace, monospace; }
  .workspace { padding: 12px 20px; overflow: auto; }
  .count { padding: 2px 8px; border-radius: 4px; background: var(--soft); }
  .note { color: var(--dim); font-size: 12px; }
  .form-row { display: grid; gap: 4px; max-width: 460px; margin-bottom: 12px; }
  .form-row input { padding: 6px 8px; border: 1px solid var(--line); border-radius: 4px; }
  #inspector { margin-top: 100px; }
  #raw { padding: 8px; overflow: auto; background: var(--soft); font-size: 12px; }
</style>
</head>
<body>
<div class="topbar" id="summary"></div>

<div class="layout">
  <div class="picker">
    <input id="search" placeholder="Search operations...">
    <select id="operations" size="24"></select>
  </div>

  <div class="workspace">
    <h2 id="title">Select an operation</h2>
    <div id="meta" class="note"></div>

    <form id="form" style="display:none; margin-top: 12px;">
      <div id="fields"></div>
      <button type="submit">Submit</button>
    </form>

    <details id="inspector" style="display:none;">
      <summary>Operation</summary>
      <pre id="raw"></pre>
    </details>
  </div>
</div>

<script>
// Embedded page data (JSON object literal)
const DATA = __DATA__;

const state = {
  selected: null,
  search: ""
};

function renderSummary() {
  const el = document.getElementById("summary");
  el.innerHTML = "";
  const title = document.createElement("b");
  title.textContent = DATA.title;
  el.appendChild(title);

  const count = document.createElement("span");
  count.className = "count";
  count.textContent = `operations: ${DATA.operations.length}`;
  el.appendChild(count);

  const source = document.createElement("span");
  source.className = "note";
  source.textContent = DATA.source;
  el.appendChild(source);
}

function matches(op) {
  if (!state.search) return true;
  return op.label.toLowerCase().includes(state.search.toLowerCase().trim());
}

function renderOptions() {
  const select = document.getElementById("operations");
  select.innerHTML = "";
  DATA.operations.forEach((op, idx) => {
    if (!matches(op)) return;
    const opt = document.createElement("option");
    opt.value = String(idx);
    opt.textContent = op.label;
    if (state.selected === idx) opt.selected = true;
    select.appendChild(opt);
  });
}

function selectOperation(idx) {
  state.selected = idx;
  const op = DATA.operations[idx];

  document.getElementById("title").textContent = op.label;
  document.getElementById("meta").textContent = op.summary || "";

  const fields = document.getElementById("fields");
  fields.innerHTML = "";
  for (const field of op.fields) {
    const row = document.createElement("div");
    row.className = "form-row";

    const label = document.createElement("label");
    label.textContent = field.label;
    row.appendChild(label);

    const input = document.createElement("input");
    input.type = field.input_type;
    input.name = field.name;
    input.required = field.required;
    row.appendChild(input);

    fields.appendChild(row);
  }
  document.getElementById("form").style.display = "block";

  document.getElementById("raw").textContent = JSON.stringify(op.operation, null, 2);
  const inspector = document.getElementById("inspector");
  inspector.open = false;
  inspector.style.display = "block";
}

document.getElementById("search").addEventListener("input", (e) => {
  state.search = e.target.value || "";
  renderOptions();
});

document.getElementById("operations").addEventListener("change", (e) => {
  if (e.target.value === "") return;
  selectOperation(Number(e.target.value));
});

document.getElementById("form").addEventListener("submit", (e) => {
  e.preventDefault();
  const data = new FormData(e.currentTarget);
  for (const [key, value] of data.entries()) {
    console.log(key + "=", value);
  }
});

renderSummary();
renderOptions();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
