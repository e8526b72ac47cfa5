use super::*;

#[test]
fn test_default_uniform_bounds() -> Result<(), ScalarGradError> {
    let mut rng = init_rng(Some(7));
    let values = Init::default().sample_n(1000, &mut rng)?;
    assert_eq!(values.len(), 1000);
    assert!(values.iter().all(|&v| (-1.0..1.0).contains(&v)));
    Ok(())
}

#[test]
fn test_seeded_sampling_is_reproducible() -> Result<(), ScalarGradError> {
    let init = Init::Normal {
        mean: 0.0,
        std_dev: 0.5,
    };
    let a = init.sample_n(16, &mut init_rng(Some(42)))?;
    let b = init.sample_n(16, &mut init_rng(Some(42)))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_zero_std_dev_is_constant() -> Result<(), ScalarGradError> {
    let init = Init::Normal {
        mean: 0.25,
        std_dev: 0.0,
    };
    let values = init.sample_n(4, &mut init_rng(Some(1)))?;
    assert_eq!(values, vec![0.25; 4]);
    Ok(())
}

#[test]
fn test_invalid_parameters() {
    let mut rng = init_rng(Some(0));
    let bad_uniform = Init::Uniform {
        low: 1.0,
        high: 1.0,
    };
    assert!(matches!(
        bad_uniform.sample_n(1, &mut rng),
        Err(ScalarGradError::InvalidArgument(_))
    ));

    let bad_normal = Init::Normal {
        mean: 0.0,
        std_dev: -1.0,
    };
    assert!(matches!(
        bad_normal.validate(),
        Err(ScalarGradError::InvalidArgument(_))
    ));
}
