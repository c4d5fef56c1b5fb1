mod calculator_flows;
mod keypad_mouse;
mod preferences;
