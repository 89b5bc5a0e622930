//! Top-level frame layout.
//!
//! One vertical stack: title bar, the two input fields, then the result
//! readout. The `ResultPanel` is rebuilt from App state on every draw —
//! it is stateless, so this is just deriving props.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::classify::classify;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultPanel, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(3), Length(3), Min(0)]);
    let [title_area, height_area, weight_area, result_area, _] = layout.areas(frame.area());

    TitleBar::new("Calcule seu IMC".to_string(), app.status_message.clone())
        .render(frame, title_area);

    tui.height_field.render(frame, height_area);
    tui.weight_field.render(frame, weight_area);

    // The NaN gate: classification only exists for a real BMI value.
    let bmi = app.measurement.bmi();
    let classification = (!bmi.is_nan()).then(|| classify(bmi));

    ResultPanel {
        bmi,
        classification,
        show_icons: app.show_icons,
        placeholder: tui.placeholder.clone(),
    }
    .render(frame, result_area);
}
