//! HTML pages for the calculator form, its results, and errors.

use crate::sizing::report::SizingReport;

/// Escapes text for safe inclusion in HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

// Rows are renamed to the `<field>_<name>` convention on submit.
const INDEX_BODY: &str = r##"<h1>Solar panel calculator</h1>
<form id="calc" method="post" action="/calcular">
  <label>Location <input name="location" required></label>
  <table id="devices">
    <tr><th>Appliance</th><th>Power (W)</th><th>Quantity</th><th>Hours/day</th></tr>
    <tr class="device">
      <td><input class="name" required></td>
      <td><input class="consumo" type="number" min="0" step="any" required></td>
      <td><input class="cantidad" type="number" min="0" step="1" required></td>
      <td><input class="horas_uso" type="number" min="0" step="any" required></td>
    </tr>
  </table>
  <button type="button" id="add">Add appliance</button>
  <button type="submit">Calculate</button>
</form>
<h2>Wiring diagram</h2>
<form method="post" action="/simular">
  <label>Number of panels <input name="num_paneles" type="number" step="1" required></label>
  <button type="submit">Show diagram</button>
</form>
<script>
document.getElementById("add").onclick = function () {
  var row = document.querySelector("#devices tr.device").cloneNode(true);
  row.querySelectorAll("input").forEach(function (i) { i.value = ""; });
  document.getElementById("devices").appendChild(row);
};
document.getElementById("calc").onsubmit = function () {
  document.querySelectorAll("#devices tr.device").forEach(function (row) {
    var name = row.querySelector(".name").value.trim();
    row.querySelector(".name").name = "dispositivo_" + name;
    ["consumo", "cantidad", "horas_uso"].forEach(function (f) {
      row.querySelector("." + f).name = f + "_" + name;
    });
  });
};
</script>"##;

/// Calculator landing page.
pub fn index_page() -> String {
    page("Solar panel calculator", INDEX_BODY)
}

/// Result page for a completed calculation.
pub fn result_page(report: &SizingReport) -> String {
    let rows: String = report
        .appliances
        .iter()
        .map(|a| {
            format!(
                "<tr><td>{}</td><td>{:.1}</td><td>{}</td><td>{:.2}</td><td>{:.3}</td></tr>\n",
                escape(&a.entry.name),
                a.entry.unit_power_watts,
                a.entry.quantity,
                a.entry.daily_hours,
                a.energy_kwh
            )
        })
        .collect();

    let body = format!(
        "<h1>Results for {location}</h1>\n\
         <table>\n<tr><th>Appliance</th><th>Power (W)</th><th>Quantity</th>\
         <th>Hours/day</th><th>Energy (kWh/day)</th></tr>\n\
         {rows}</table>\n\
         <p>Total daily demand: <strong>{total:.3} kWh</strong></p>\n\
         <p>Rated power per panel: <strong>{rated:.3} kW</strong></p>\n\
         <p>Panels required: <strong>{count}</strong></p>\n\
         <form method=\"post\" action=\"/simular\">\
         <input type=\"hidden\" name=\"num_paneles\" value=\"{count}\">\
         <button type=\"submit\">Show wiring diagram</button></form>\n\
         <p><a href=\"/\">New calculation</a></p>",
        location = escape(&report.location),
        total = report.total_kwh,
        rated = report.rated_power_kw,
        count = report.panel_count,
    );
    page("Solar sizing results", &body)
}

/// Error page carrying a user-facing message.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Error</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to calculator</a></p>",
        escape(message)
    );
    page("Error", &body)
}
