/// Static form served at `/`.
pub(crate) const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>CyberDoom</title>
</head>
<body>
<main>
<h1>&#x1F6E1;&#xFE0F; CyberDoom: Guardia de Datos</h1>
<form method="post" action="/certificado">
<label for="nombre">Nombre para el certificado</label>
<input id="nombre" name="nombre" type="text">
<label for="score">Score</label>
<input id="score" name="score" type="number" min="0" step="1" value="0">
<button type="submit">Generar certificado</button>
</form>
</main>
</body>
</html>
"#;
