use crate::models::{AuditSummary, DogAssessment, DogRecord, IntakeVerdict, OwnerGroups};

impl DogAssessment {
    pub fn verdict(&self) -> IntakeVerdict {
        if self.current_food > self.recommended_food {
            IntakeVerdict::TooMuch
        } else if self.current_food < self.recommended_food {
            IntakeVerdict::TooLittle
        } else {
            IntakeVerdict::Exact
        }
    }

    pub fn eats_okay_amount(&self) -> bool {
        self.current_food > self.recommended_food * 0.9
            && self.current_food < self.recommended_food * 1.1
    }
}

impl IntakeVerdict {
    pub fn description(&self) -> &'static str {
        match self {
            IntakeVerdict::TooMuch => "too much",
            IntakeVerdict::TooLittle => "too little",
            IntakeVerdict::Exact => "exactly the recommended amount",
        }
    }
}

pub fn recommended_portion(weight_kg: f64) -> f64 {
    (weight_kg.powf(0.75) * 28.0).trunc()
}

pub fn assess_dogs(dogs: Vec<DogRecord>) -> anyhow::Result<Vec<DogAssessment>> {
    let mut assessed = Vec::with_capacity(dogs.len());

    for dog in dogs {
        if !dog.weight_kg.is_finite() || dog.weight_kg <= 0.0 {
            anyhow::bail!(
                "dog owned by {} has invalid weight {}",
                dog.owners.join(", "),
                dog.weight_kg
            );
        }
        if !dog.current_food.is_finite() || dog.current_food <= 0.0 {
            anyhow::bail!(
                "dog owned by {} has invalid food portion {}",
                dog.owners.join(", "),
                dog.current_food
            );
        }

        let recommended_food = recommended_portion(dog.weight_kg);
        assessed.push(DogAssessment {
            owners: dog.owners,
            weight_kg: dog.weight_kg,
            current_food: dog.current_food,
            recommended_food,
        });
    }

    Ok(assessed)
}

pub fn find_by_owner<'a>(dogs: &'a [DogAssessment], owner: &str) -> Option<&'a DogAssessment> {
    dogs.iter().find(|dog| dog.owners.iter().any(|o| o == owner))
}

pub fn owners_by_verdict(dogs: &[DogAssessment]) -> OwnerGroups {
    let owners_with = |verdict: IntakeVerdict| -> Vec<String> {
        dogs.iter()
            .filter(|dog| dog.verdict() == verdict)
            .flat_map(|dog| dog.owners.iter().cloned())
            .collect()
    };

    OwnerGroups {
        eat_too_much: owners_with(IntakeVerdict::TooMuch),
        eat_too_little: owners_with(IntakeVerdict::TooLittle),
    }
}

pub fn any_exact_portion(dogs: &[DogAssessment]) -> bool {
    dogs.iter().any(|dog| dog.verdict() == IntakeVerdict::Exact)
}

pub fn any_okay_portion(dogs: &[DogAssessment]) -> bool {
    dogs.iter().any(DogAssessment::eats_okay_amount)
}

pub fn okay_portion_dogs(dogs: &[DogAssessment]) -> Vec<DogAssessment> {
    dogs.iter()
        .filter(|dog| dog.eats_okay_amount())
        .cloned()
        .collect()
}

pub fn sorted_by_recommended(dogs: &[DogAssessment]) -> Vec<DogAssessment> {
    let mut sorted = dogs.to_vec();
    sorted.sort_by(|a, b| {
        a.recommended_food
            .partial_cmp(&b.recommended_food)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

pub fn summarize(dogs: &[DogAssessment]) -> AuditSummary {
    let groups = owners_by_verdict(dogs);

    AuditSummary {
        dogs: dogs.to_vec(),
        owners_eat_too_much: groups.eat_too_much,
        owners_eat_too_little: groups.eat_too_little,
        any_exact_portion: any_exact_portion(dogs),
        any_okay_portion: any_okay_portion(dogs),
        okay_portion_dogs: okay_portion_dogs(dogs),
        by_recommended_portion: sorted_by_recommended(dogs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_dogs;

    fn dog(weight_kg: f64, current_food: f64, owners: &[&str]) -> DogRecord {
        DogRecord {
            weight_kg,
            current_food,
            owners: owners.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn assessed_sample() -> Vec<DogAssessment> {
        assess_dogs(sample_dogs()).unwrap()
    }

    #[test]
    fn recommended_portion_truncates_toward_zero() {
        assert_eq!(recommended_portion(22.0), 284.0);
        assert_eq!(recommended_portion(8.0), 133.0);
        assert_eq!(recommended_portion(13.0), 191.0);
        assert_eq!(recommended_portion(32.0), 376.0);
    }

    #[test]
    fn assessment_keeps_record_order_and_derives_portions() {
        let assessed = assessed_sample();
        let portions: Vec<f64> = assessed.iter().map(|d| d.recommended_food).collect();
        assert_eq!(portions, vec![284.0, 133.0, 191.0, 376.0]);

        let verdicts: Vec<IntakeVerdict> = assessed.iter().map(|d| d.verdict()).collect();
        assert_eq!(
            verdicts,
            vec![
                IntakeVerdict::TooLittle,
                IntakeVerdict::TooMuch,
                IntakeVerdict::TooMuch,
                IntakeVerdict::TooLittle,
            ]
        );
    }

    #[test]
    fn rejects_non_positive_weight() {
        let result = assess_dogs(vec![dog(0.0, 200.0, &["Avery"])]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_finite_food_portion() {
        let result = assess_dogs(vec![dog(10.0, f64::NAN, &["Avery"])]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_finds_dog_by_any_listed_owner() {
        let assessed = assessed_sample();
        let sarahs = find_by_owner(&assessed, "Sarah").unwrap();
        assert_eq!(sarahs.recommended_food, 191.0);
        assert_eq!(sarahs.verdict(), IntakeVerdict::TooMuch);

        let johns = find_by_owner(&assessed, "John").unwrap();
        assert_eq!(johns.recommended_food, sarahs.recommended_food);
    }

    #[test]
    fn lookup_of_unknown_owner_is_none() {
        let assessed = assessed_sample();
        assert!(find_by_owner(&assessed, "Zelda").is_none());
    }

    #[test]
    fn owner_groups_follow_record_then_owner_order() {
        let groups = owners_by_verdict(&assessed_sample());
        assert_eq!(groups.eat_too_much, vec!["Matilda", "Sarah", "John"]);
        assert_eq!(groups.eat_too_little, vec!["Alice", "Bob", "Michael"]);
    }

    #[test]
    fn exact_portion_dog_lands_in_neither_group() {
        let exact_food = recommended_portion(16.0);
        let assessed = assess_dogs(vec![
            dog(16.0, exact_food, &["Avery"]),
            dog(8.0, 200.0, &["Matilda"]),
        ])
        .unwrap();

        assert_eq!(assessed[0].verdict(), IntakeVerdict::Exact);
        let groups = owners_by_verdict(&assessed);
        assert!(!groups.eat_too_much.contains(&"Avery".to_string()));
        assert!(!groups.eat_too_little.contains(&"Avery".to_string()));
        assert!(any_exact_portion(&assessed));
    }

    #[test]
    fn okay_range_excludes_both_bounds() {
        let recommended = recommended_portion(16.0);
        let assessed = assess_dogs(vec![
            dog(16.0, recommended * 0.9, &["Low"]),
            dog(16.0, recommended * 0.9 + 1.0, &["AboveLow"]),
            dog(16.0, recommended * 1.1, &["High"]),
            dog(16.0, recommended * 1.1 - 1.0, &["BelowHigh"]),
        ])
        .unwrap();

        assert!(!assessed[0].eats_okay_amount());
        assert!(assessed[1].eats_okay_amount());
        assert!(!assessed[2].eats_okay_amount());
        assert!(assessed[3].eats_okay_amount());
    }

    #[test]
    fn okay_existence_check_matches_okay_subset() {
        let assessed = assessed_sample();
        let subset = okay_portion_dogs(&assessed);
        assert_eq!(any_okay_portion(&assessed), !subset.is_empty());
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].owners, vec!["Michael"]);

        let far_off = assess_dogs(vec![dog(8.0, 400.0, &["Matilda"])]).unwrap();
        assert_eq!(
            any_okay_portion(&far_off),
            !okay_portion_dogs(&far_off).is_empty()
        );
        assert!(!any_okay_portion(&far_off));
    }

    #[test]
    fn sort_is_stable_and_leaves_input_untouched() {
        let assessed = assess_dogs(vec![
            dog(16.0, 200.0, &["First"]),
            dog(22.0, 250.0, &["Heaviest"]),
            dog(16.0, 230.0, &["Second"]),
        ])
        .unwrap();

        let sorted = sorted_by_recommended(&assessed);
        let again = sorted_by_recommended(&assessed);

        let order: Vec<&str> = sorted.iter().map(|d| d.owners[0].as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Heaviest"]);

        let order_again: Vec<&str> = again.iter().map(|d| d.owners[0].as_str()).collect();
        assert_eq!(order, order_again);

        let original: Vec<&str> = assessed.iter().map(|d| d.owners[0].as_str()).collect();
        assert_eq!(original, vec!["First", "Heaviest", "Second"]);
    }

    #[test]
    fn summary_mirrors_individual_operations() {
        let assessed = assessed_sample();
        let summary = summarize(&assessed);

        assert_eq!(summary.dogs.len(), 4);
        assert_eq!(summary.owners_eat_too_much, vec!["Matilda", "Sarah", "John"]);
        assert_eq!(summary.owners_eat_too_little, vec!["Alice", "Bob", "Michael"]);
        assert!(!summary.any_exact_portion);
        assert!(summary.any_okay_portion);
        assert_eq!(summary.okay_portion_dogs.len(), 1);

        let sorted: Vec<f64> = summary
            .by_recommended_portion
            .iter()
            .map(|d| d.recommended_food)
            .collect();
        assert_eq!(sorted, vec![133.0, 191.0, 284.0, 376.0]);
    }
}
