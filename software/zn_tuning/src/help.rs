//! Operator instructions for the open-loop step test.

/// Steps of the procedure, each with its instructions
pub const PROCEDURE: &[(&str, &[&str])] = &[
    (
        "Step 1: Prepare the test",
        &[
            "Put the controller (PLC, etc.) in MANUAL mode.",
            "Hold the output (MV) steady and wait for the process variable (PV) to settle.",
        ],
    ),
    (
        "Step 2: Apply the step and record the changes",
        &[
            "Change the MV quickly, for example from 40% to 50%.",
            "ΔMV is the difference between the final and initial MV (10% in the example).",
            "Wait for the PV to settle again. ΔPV is the total change in the PV.",
        ],
    ),
    (
        "Step 3: Read L and T from the reaction curve",
        &[
            "Dead time L: seconds from the step until the PV starts to respond.",
            "Time constant T: seconds for the PV to reach 63.2% of its total change after L, \
             or the span between where the tangent at the inflection point crosses the \
             initial and final PV values.",
        ],
    ),
    (
        "Step 4: Calculate",
        &[
            "Enter ΔMV, ΔPV, L and T and calculate to get Kp, Ti and Td.",
        ],
    ),
];

/// The procedure as numbered plain text
pub fn procedure_text() -> String {
    let mut out = String::from("Ziegler-Nichols open-loop (reaction curve) procedure\n");
    for (i, (title, lines)) in PROCEDURE.iter().enumerate() {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        for (j, line) in lines.iter().enumerate() {
            out.push_str(&format!("  {}.{}. {line}\n", i + 1, j + 1));
        }
    }

    out
}
