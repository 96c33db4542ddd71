//! Two front ends sharing one calculator.
//!
//! Demonstrated here:
//!   * Driving the web-form style table and the app style label grid from the same calculation
//!   * Editing form text and resubmitting after an error

use zn_tuning::*;

fn main() {
    let calculator = ZieglerNichols;

    // Web form, pre-filled with the default step test
    let mut web = Frontend::new(&calculator, FormFields::default(), TableRenderer::new());
    web.submit().unwrap();
    println!("{}", web.renderer().output());

    // App, with a typo in the dead time field
    let form = FormFields::new("8", "3.2", "4,5", "35");
    let mut app = Frontend::new(&calculator, form, LabelRenderer::new());
    match app.submit() {
        Ok(_) => println!("Unexpectedly accepted the typo"),
        Err(e) => println!("Refused: {e}"),
    }
    println!("{}\n", app.renderer());

    // Fix the field and try again
    app.renderer_mut().dismiss_dialog();
    app.form_mut().set(Field::DeadTime, "4.5");
    app.submit().unwrap();
    println!("{}", app.renderer());
}
