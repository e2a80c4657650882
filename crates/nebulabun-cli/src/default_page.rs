//! Page shown when neither a file nor a URL is given.

pub const DEFAULT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Nebulabun App</title>
    <style>
        body {
            margin: 0;
            padding: 20px;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            height: 100vh;
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: center;
        }

        .container {
            text-align: center;
            background: rgba(255, 255, 255, 0.1);
            padding: 40px;
            border-radius: 20px;
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.2);
        }

        h1 {
            font-size: 3em;
            margin-bottom: 20px;
            text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
        }

        p {
            font-size: 1.2em;
            margin-bottom: 30px;
            opacity: 0.9;
        }

        .draggable {
            cursor: move;
            padding: 10px 20px;
            background: rgba(255, 255, 255, 0.2);
            border-radius: 10px;
            margin: 10px;
        }

        .clickable {
            cursor: pointer;
            padding: 10px 20px;
            background: #4CAF50;
            border: none;
            border-radius: 10px;
            color: white;
            font-size: 1em;
            margin: 10px;
        }

        .clickable:hover {
            background: #45a049;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Nebulabun</h1>
        <p>A lightweight WebView launcher</p>

        <div class="draggable">Drag here to move the window</div>

        <div class="controls">
            <button class="clickable" onclick="Nebulabun.setTransparency(128)">Translucent</button>
            <button class="clickable" onclick="Nebulabun.setTransparency(255)">Opaque</button>
            <button class="clickable" onclick="Nebulabun.closeWindow()">Close</button>
        </div>
    </div>

    <script>
        function waitForNebulabun() {
            if (typeof window.Nebulabun !== 'undefined') {
                console.log('Nebulabun API available');
            } else {
                setTimeout(waitForNebulabun, 100);
            }
        }
        waitForNebulabun();
    </script>
</body>
</html>
"#;
