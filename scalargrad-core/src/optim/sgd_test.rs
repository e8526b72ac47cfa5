#[cfg(test)]
mod tests {
    use crate::{
        error::ScalarGradError,
        nn::{Activation, Layer, Module, Neuron},
        optim::optimizer_trait::Optimizer,
        optim::sgd::SgdOptimizer,
        value::Value,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
        let a = Value::new(1.0);
        let b = Value::new(-2.0);
        // loss = a * b -> d/da = b, d/db = a
        let loss = &a * &b;
        loss.backward()?;

        let mut optimizer = SgdOptimizer::new(vec![a.clone(), b.clone()], 0.1, 0.0)?;
        optimizer.step()?;

        assert_relative_eq!(a.value(), 1.0 - 0.1 * -2.0);
        assert_relative_eq!(b.value(), -2.0 - 0.1 * 1.0);
        Ok(())
    }

    #[test]
    fn test_sgd_momentum_accumulates_velocity() -> Result<(), ScalarGradError> {
        let p = Value::new(0.0);
        let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.5, 0.9)?;

        // Constant gradient of 1 for two steps.
        (&p * 1.0).backward()?;
        optimizer.step()?;
        assert_relative_eq!(p.value(), -0.5);

        optimizer.zero_grad();
        (&p * 1.0).backward()?;
        optimizer.step()?;
        // v = 0.9 * 1 + 1 = 1.9
        assert_relative_eq!(p.value(), -0.5 - 0.5 * 1.9, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_sgd_without_momentum_matches_module_update() -> Result<(), ScalarGradError> {
        let build = || -> Result<Layer, ScalarGradError> {
            Layer::from_neurons(vec![
                Neuron::from_parameters(vec![0.3, -0.2], 0.1, Activation::Tanh)?,
                Neuron::from_parameters(vec![-0.7, 0.4], 0.0, Activation::Tanh)?,
            ])
        };
        let by_update = build()?;
        let by_optimizer = build()?;
        let x = [Value::new(0.5), Value::new(-1.5)];

        let out: Value = by_update.forward(&x)?.into_iter().sum();
        out.backward()?;
        by_update.update(0.05);

        let mut optimizer = SgdOptimizer::new(by_optimizer.parameters(), 0.05, 0.0)?;
        let out: Value = by_optimizer.forward(&x)?.into_iter().sum();
        out.backward()?;
        optimizer.step()?;

        for (u, o) in by_update.parameters().iter().zip(by_optimizer.parameters().iter()) {
            assert_eq!(u.value(), o.value());
        }
        Ok(())
    }

    #[test]
    fn test_sgd_zero_grad() -> Result<(), ScalarGradError> {
        let a = Value::new(2.0);
        a.pow(2.0).backward()?;
        assert_eq!(a.grad(), 4.0);

        let mut optimizer = SgdOptimizer::new(vec![a.clone()], 0.1, 0.0)?;
        optimizer.zero_grad();
        assert_eq!(a.grad(), 0.0);
        Ok(())
    }

    #[test]
    fn test_sgd_non_finite_gradient_is_applied() -> Result<(), ScalarGradError> {
        let a = Value::new(1.0);
        (&a * f64::NAN).backward()?;
        let mut optimizer = SgdOptimizer::new(vec![a.clone()], 0.1, 0.0)?;
        optimizer.step()?;
        assert!(a.value().is_nan());
        Ok(())
    }

    #[test]
    fn test_sgd_rejects_bad_hyperparameters() -> Result<(), ScalarGradError> {
        assert!(matches!(
            SgdOptimizer::new(Vec::<Value>::new(), 0.0, 0.0),
            Err(ScalarGradError::InvalidArgument(_))
        ));
        assert!(SgdOptimizer::new(Vec::<Value>::new(), f64::NAN, 0.0).is_err());
        assert!(SgdOptimizer::new(Vec::<Value>::new(), 0.1, -0.5).is_err());

        let mut optimizer = SgdOptimizer::new(Vec::<Value>::new(), 0.1, 0.0)?;
        assert!(optimizer.set_learning_rate(-1.0).is_err());
        assert_eq!(optimizer.learning_rate(), 0.1);
        optimizer.set_learning_rate(0.01)?;
        assert_eq!(optimizer.learning_rate(), 0.01);
        Ok(())
    }
}
