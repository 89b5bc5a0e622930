//! End-to-end pipeline scenarios: typed field text → reducer → calculation →
//! classification → presentation tokens → rendered frame.

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use imc::core::action::{Action, update};
use imc::core::classify::{Classification, classify};
use imc::core::config::{ImcConfig, resolve};
use imc::core::presentation::{Icon, Severity, icon, severity};
use imc::core::state::{App, FormPhase};
use imc::tui::TuiState;
use imc::tui::component::EventHandler;
use imc::tui::event::TuiEvent;
use imc::tui::ui::draw_ui;

/// Type text into the focused field the way the event loop would: one
/// character event at a time, each emitted change reduced into the app.
fn type_into_height(app: &mut App, tui: &mut TuiState, text: &str) {
    for c in text.chars() {
        if let Some(imc::tui::components::FieldEvent::Changed(buffer)) =
            tui.height_field.handle_event(&TuiEvent::InputChar(c))
        {
            update(app, Action::HeightInput(buffer));
        }
    }
}

fn type_into_weight(app: &mut App, tui: &mut TuiState, text: &str) {
    for c in text.chars() {
        if let Some(imc::tui::components::FieldEvent::Changed(buffer)) =
            tui.weight_field.handle_event(&TuiEvent::InputChar(c))
        {
            update(app, Action::WeightInput(buffer));
        }
    }
}

fn setup() -> (App, TuiState) {
    let config = resolve(&ImcConfig::default(), false);
    (App::new(config.show_icons), TuiState::new(&config))
}

fn render_to_text(app: &App, tui: &mut TuiState) -> String {
    let backend = TestBackend::new(70, 14);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn scenario_overweight_no_icon() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "175");
    type_into_weight(&mut app, &mut tui, "80");

    let bmi = app.measurement.bmi();
    assert!((bmi - 26.12).abs() < 0.005);

    let c = classify(bmi);
    assert_eq!(c, Classification::Overweight);
    assert_eq!(severity(c), Severity::Ok);
    assert_eq!(icon(c), None);

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains("= 26.12"));
    assert!(text.contains("Você está acima do peso."));
    assert!(!text.contains('⚠'));
}

#[test]
fn scenario_severe_thinness_warning_icon() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "170");
    type_into_weight(&mut app, &mut tui, "45");

    let bmi = app.measurement.bmi();
    assert!((bmi - 15.57).abs() < 0.005);

    let c = classify(bmi);
    assert_eq!(c, Classification::SevereThinness);
    assert_eq!(severity(c), Severity::Bad);
    assert_eq!(icon(c), Some(Icon::Warning));

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains("= 15.57"));
    assert!(text.contains("Você está com magreza severa. Alimente-se!"));
    assert!(text.contains('⚠'));
}

#[test]
fn scenario_healthy_check_icon() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "180");
    type_into_weight(&mut app, &mut tui, "72");

    let bmi = app.measurement.bmi();
    assert!((bmi - 22.22).abs() < 0.005);

    let c = classify(bmi);
    assert_eq!(c, Classification::Healthy);
    assert_eq!(severity(c), Severity::Good);
    assert_eq!(icon(c), Some(Icon::Check));

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains("= 22.22"));
    assert!(text.contains("Você está dentro da normalidade."));
    assert!(text.contains('✔'));
}

#[test]
fn scenario_morbid_obesity_skull_icon() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "160");
    type_into_weight(&mut app, &mut tui, "110");

    let bmi = app.measurement.bmi();
    assert!((bmi - 42.97).abs() < 0.005);

    let c = classify(bmi);
    assert_eq!(c, Classification::Obesity3);
    assert_eq!(severity(c), Severity::Extreme);
    assert_eq!(icon(c), Some(Icon::Skull));

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains("= 42.97"));
    assert!(text.contains("Você está com obesidade mórbida. Cuide-se urgentemente!"));
    assert!(text.contains('☠'));
}

#[test]
fn scenario_partial_form_renders_placeholder() {
    let (mut app, mut tui) = setup();
    type_into_weight(&mut app, &mut tui, "70");

    assert_eq!(app.measurement.phase(), FormPhase::Partial);
    assert!(app.measurement.bmi().is_nan());

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains('?'));
    assert!(!text.contains("Você"), "no classification for invalid BMI");
}

#[test]
fn scenario_zero_weight_still_computes() {
    // Typed "0" is a number, so the calculation runs: BMI 0 → severe thinness.
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "150");
    type_into_weight(&mut app, &mut tui, "0");

    let bmi = app.measurement.bmi();
    assert_eq!(bmi, 0.0);
    assert_eq!(classify(bmi), Classification::SevereThinness);

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains("= 0.00"));
}

#[test]
fn scenario_zero_height_is_invalid() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "0");
    type_into_weight(&mut app, &mut tui, "70");

    assert!(app.measurement.bmi().is_nan());
    let text = render_to_text(&app, &mut tui);
    assert!(text.contains('?'));
    assert!(!text.contains("Você"));
}

#[test]
fn scenario_garbled_text_propagates_as_invalid() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "1x5");
    type_into_weight(&mut app, &mut tui, "80");

    assert!(app.measurement.bmi().is_nan());
    let text = render_to_text(&app, &mut tui);
    assert!(text.contains('?'));
}

#[test]
fn scenario_backspacing_to_empty_unsets_field() {
    let (mut app, mut tui) = setup();
    type_into_height(&mut app, &mut tui, "175");
    type_into_weight(&mut app, &mut tui, "80");
    assert_eq!(app.measurement.phase(), FormPhase::Complete);

    for _ in 0..2 {
        if let Some(imc::tui::components::FieldEvent::Changed(buffer)) =
            tui.weight_field.handle_event(&TuiEvent::Backspace)
        {
            update(&mut app, Action::WeightInput(buffer));
        }
    }
    assert_eq!(app.measurement.weight_kg, None);
    assert_eq!(app.measurement.phase(), FormPhase::Partial);

    let text = render_to_text(&app, &mut tui);
    assert!(text.contains('?'));
}

#[test]
fn scenario_every_keystroke_recomputes() {
    // "1" → 800000, "17" → ~276.8, "175" → 26.12: the readout is live, not
    // submit-driven.
    let (mut app, mut tui) = setup();
    type_into_weight(&mut app, &mut tui, "80");

    type_into_height(&mut app, &mut tui, "1");
    assert_eq!(classify(app.measurement.bmi()), Classification::Obesity3);

    type_into_height(&mut app, &mut tui, "7");
    assert_eq!(classify(app.measurement.bmi()), Classification::Obesity3);

    type_into_height(&mut app, &mut tui, "5");
    assert_eq!(classify(app.measurement.bmi()), Classification::Overweight);
}
