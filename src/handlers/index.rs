use actix_web::{HttpResponse, Result};

// The form mirrors the service surface: three text inputs, two actions, one
// display area. Everything else goes through the JSON API.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Food Picker</title>
<style>
body { font-family: sans-serif; max-width: 600px; margin: 2em auto; }
label { display: block; margin: 0.5em 0; }
pre { background: #f0f0f0; padding: 1em; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>Food Picker</h1>
<label>Enter Food Type: <input id="food_type"></label>
<label>Enter City Name: <input id="city_name"></label>
<label>Enter Distance (miles): <input id="distance_miles"></label>
<button id="search">Pick Food</button>
<button id="random">Choose Random Restaurant</button>
<pre id="result"></pre>
<script>
async function post(path, body) {
  const res = await fetch(path, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(body),
  });
  const data = await res.json();
  document.getElementById('result').textContent = data.display || data.error || '';
}
document.getElementById('search').addEventListener('click', () => post('/api/search', {
  food_type: document.getElementById('food_type').value,
  city_name: document.getElementById('city_name').value,
  distance_miles: document.getElementById('distance_miles').value,
}));
document.getElementById('random').addEventListener('click', () => post('/api/random', {}));
</script>
</body>
</html>
"#;

pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML))
}
