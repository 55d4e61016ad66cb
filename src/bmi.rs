use crate::models::BmiSubject;

pub fn body_mass_index(subject: &BmiSubject) -> f64 {
    subject.mass_kg / subject.height_m.powi(2)
}

pub fn parse_subject(raw: &str) -> anyhow::Result<BmiSubject> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 3 {
        anyhow::bail!("expected NAME:MASS_KG:HEIGHT_M, got {raw}");
    }

    let name = parts[0].trim();
    if name.is_empty() {
        anyhow::bail!("subject name is empty in {raw}");
    }

    let mass_kg: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid mass {} in {raw}", parts[1]))?;
    let height_m: f64 = parts[2]
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid height {} in {raw}", parts[2]))?;

    Ok(BmiSubject {
        name: name.to_string(),
        mass_kg,
        height_m,
    })
}

pub fn compare(first: &BmiSubject, second: &BmiSubject) -> anyhow::Result<String> {
    validate(first)?;
    validate(second)?;

    let first_bmi = body_mass_index(first);
    let second_bmi = body_mass_index(second);

    let line = if first_bmi > second_bmi {
        format!(
            "{}'s BMI ({:.1}) is higher than {}'s ({:.1})!",
            first.name, first_bmi, second.name, second_bmi
        )
    } else {
        format!(
            "{}'s BMI ({:.1}) is higher than {}'s ({:.1})!",
            second.name, second_bmi, first.name, first_bmi
        )
    };

    Ok(line)
}

fn validate(subject: &BmiSubject) -> anyhow::Result<()> {
    if !subject.mass_kg.is_finite() || subject.mass_kg <= 0.0 {
        anyhow::bail!("{} has invalid mass {}", subject.name, subject.mass_kg);
    }
    if !subject.height_m.is_finite() || subject.height_m <= 0.0 {
        anyhow::bail!("{} has invalid height {}", subject.name, subject.height_m);
    }
    Ok(())
}
