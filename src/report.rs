use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::DogAssessment;
use crate::portion;

pub fn build_report(source: &str, generated_on: NaiveDate, dogs: &[DogAssessment]) -> String {
    let summary = portion::summarize(dogs);

    let mut output = String::new();
    let _ = writeln!(output, "# Feeding Portion Report");
    let _ = writeln!(output, "Generated {} from {}", generated_on, source);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Portions");

    if summary.dogs.is_empty() {
        let _ = writeln!(output, "No dog records to assess.");
    } else {
        for dog in summary.dogs.iter() {
            let _ = writeln!(
                output,
                "- {}: {} kg, eating {} g of a recommended {} g ({})",
                dog.owners.join(", "),
                dog.weight_kg,
                dog.current_food,
                dog.recommended_food,
                dog.verdict().description()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Owners");

    if summary.owners_eat_too_much.is_empty() {
        let _ = writeln!(output, "No dogs eat too much.");
    } else {
        let _ = writeln!(
            output,
            "{}'s dogs eat too much!",
            summary.owners_eat_too_much.join(" and ")
        );
    }

    if summary.owners_eat_too_little.is_empty() {
        let _ = writeln!(output, "No dogs eat too little.");
    } else {
        let _ = writeln!(
            output,
            "{}'s dogs eat too little!",
            summary.owners_eat_too_little.join(" and ")
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Checks");
    let _ = writeln!(
        output,
        "Any dog eating exactly the recommended portion: {}",
        summary.any_exact_portion
    );
    let _ = writeln!(
        output,
        "Any dog eating an okay amount: {}",
        summary.any_okay_portion
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Okay Portions");

    if summary.okay_portion_dogs.is_empty() {
        let _ = writeln!(output, "No dogs are eating an okay amount.");
    } else {
        for dog in summary.okay_portion_dogs.iter() {
            let _ = writeln!(
                output,
                "- {}: {} g against a recommended {} g",
                dog.owners.join(", "),
                dog.current_food,
                dog.recommended_food
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Dogs by Recommended Portion");

    for dog in summary.by_recommended_portion.iter() {
        let _ = writeln!(
            output,
            "- {}: {} g recommended",
            dog.owners.join(", "),
            dog.recommended_food
        );
    }

    output
}
