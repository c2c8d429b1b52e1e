//! Scoreboard page served at `/`.
//!
//! Polls `/game-status` once per `STATUS_POLL_MS` and issues a GET to
//! `/start-game` from the button.

use crate::types::STATUS_POLL_MS;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Rock-Paper-Scissors Game</title>
<style>
body { font-family: Arial, sans-serif; text-align: center; padding: 20px; }
h1 { font-size: 36px; }
#score { font-size: 24px; margin-top: 20px; }
#gestures { font-size: 20px; margin-top: 20px; }
#countdown { font-size: 20px; margin-top: 20px; }
.btn { padding: 10px 20px; font-size: 18px; cursor: pointer; margin-top: 20px; }
</style>
</head>
<body>
<h1>Rock-Paper-Scissors Game</h1>
<div id="score"></div>
<div id="gestures"></div>
<div id="countdown"></div>
<button class="btn" onclick="startNewGame()">Start New Game</button>
<script>
function byId(id) { return document.getElementById(id); }

function startNewGame() {
  fetch('/start-game');
  byId('gestures').innerText = 'Game Started!';
  byId('countdown').innerText = 'Get ready! Gesture in: 5';
}

function updateGameStatus() {
  fetch('/game-status')
    .then(response => response.json())
    .then(data => {
      byId('score').innerText = 'Human: ' + data.humanScore + ' | Robot: ' + data.robotScore;
      byId('gestures').innerText = 'Human Gesture: ' + data.humanGesture + ' | Robot Gesture: ' + data.robotGesture;
      byId('countdown').innerText = 'Get ready! Gesture in: ' + data.countdown;
      if (data.gameOver) {
        byId('gestures').innerText = 'Game Over!';
        byId('countdown').innerText = data.humanScore > data.robotScore ? 'Human Wins!' : 'Robot Wins!';
      }
    })
    .catch(() => {});
}

setInterval(updateGameStatus, __POLL_MS__);
</script>
</body>
</html>
"#;

/// Full HTML document for the scoreboard.
pub fn index_html() -> String {
    TEMPLATE.replace("__POLL_MS__", &STATUS_POLL_MS.to_string())
}
