//! Fixed copy shown by every surface of the applet.

pub const APP_TITLE: &str = "Exponential Speed Model";
pub const APP_SUBTITLE: &str = "Interactive Algebra 2: Exponential Growth & Decay";
pub const APP_INTRO: &str = "This app uses an exponential equation to model how speed changes over time. \
Students can adjust the initial speed, rate of change, and time to explore exponential growth and decay.";
pub const PARAMETERS_HEADER: &str = "Model Parameters";

pub const PLOT_TITLE: &str = "Speed vs. Time";
pub const PLOT_X_LABEL: &str = "Time (hours)";
pub const PLOT_Y_LABEL: &str = "Speed (mph)";

pub const LIMITATIONS: &str = "This model is theoretical and not realistic for real driving conditions. \
It is intended for learning exponential functions only.";

pub const CHAT_HEADER: &str = "Ask the Model";
pub const CHAT_PLACEHOLDER: &str = "Type your question here...";
