//! The visualization page. Presentation only: it polls `/position` and posts
//! commands, touching no core state beyond the same snapshot the JSON
//! endpoint serves.

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Window Covering Simulator</title>
    <style>
        body {
            font-family: sans-serif;
            margin: 0;
            height: 100vh;
            overflow: hidden;
            background: linear-gradient(to bottom, #87ceeb 0%, #cfe8d5 70%, #5a8f5a 100%);
        }
        #roller-blind {
            width: 100vw;
            height: 100vh;
            background: repeating-linear-gradient(to bottom, #f5f2ea 0px, #f5f2ea 38px, #d8d2c2 38px, #d8d2c2 42px);
            position: absolute;
            top: 0;
            transform: translate(0, -100vh);
            transition: transform 1s linear;
        }
        #bottom-bar {
            width: 100%;
            height: 24px;
            background: #ffffff;
            position: absolute;
            bottom: 0;
            box-shadow: black 0px 5px 10px;
        }
        #controls {
            position: absolute;
            bottom: 16px;
            left: 50%;
            transform: translate(-50%, 0);
            display: flex;
            gap: 8px;
        }
        #controls button {
            padding: 8px 16px;
            border: 1px solid #888;
            border-radius: 4px;
            background: #ffffff;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div id="roller-blind">
        <div id="bottom-bar"></div>
    </div>
    <div id="controls">
        <button onclick="sendCommand({type: 'up_or_open'})">Open</button>
        <button onclick="sendCommand({type: 'stop_motion'})">Stop</button>
        <button onclick="sendCommand({type: 'down_or_close'})">Close</button>
    </div>
    <script>
        const REFRESH_INTERVAL_MS = __REFRESH_INTERVAL_MS__;
        const rollerBlind = document.getElementById('roller-blind');

        const sendCommand = (command) => {
            fetch('/command', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(command),
            }).catch((error) => console.error('Error while sending command: ', error));
        };

        const updatePosition = async () => {
            try {
                const response = await fetch('/position');
                const data = await response.json();
                const position100ths = data.currentPositionLiftPercent100ths;

                const positionPercent = position100ths / 100;
                const vhValue = 100 - positionPercent;

                rollerBlind.style.transform = `translate(0, -${vhValue}vh)`;
            } catch (error) {
                console.error('Error while fetching window covering position: ', error);
            }
        };

        setInterval(updatePosition, REFRESH_INTERVAL_MS);

        updatePosition();
    </script>
</body>
</html>
"#;

pub fn render(refresh_interval_ms: u64) -> String {
    TEMPLATE.replace("__REFRESH_INTERVAL_MS__", &refresh_interval_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_the_refresh_interval() {
        let html = render(250);
        assert!(html.contains("const REFRESH_INTERVAL_MS = 250;"));
        assert!(!html.contains("__REFRESH_INTERVAL_MS__"));
    }
}
