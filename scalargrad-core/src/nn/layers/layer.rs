use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `n_outputs` neurons reading the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `n_outputs` freshly initialized neurons with
    /// `n_inputs` weights each.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_neurons(neurons)
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// * `InvalidArgument` if `neurons` is empty.
    /// * `LengthMismatch` if the neurons disagree on their input count.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let n_inputs = match neurons.first() {
            Some(first) => first.n_inputs(),
            None => {
                return Err(ScalarGradError::InvalidArgument(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.n_inputs() != n_inputs) {
            return Err(ScalarGradError::LengthMismatch {
                expected: n_inputs,
                actual: odd.n_inputs(),
                operation: "Layer construction".to_string(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn n_inputs(&self) -> usize {
        self.neurons[0].n_inputs()
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::init::init_rng;

    fn fixed_layer() -> Result<Layer, ScalarGradError> {
        Layer::from_neurons(vec![
            Neuron::from_parameters(vec![1.0, 0.0], 0.0, Activation::Relu)?,
            Neuron::from_parameters(vec![0.0, 1.0], 0.5, Activation::Relu)?,
            Neuron::from_parameters(vec![-1.0, -1.0], 0.0, Activation::Relu)?,
        ])
    }

    #[test]
    fn test_layer_forward() -> Result<(), ScalarGradError> {
        let layer = fixed_layer()?;
        let outs = layer.forward(&[Value::new(2.0), Value::new(3.0)])?;
        let values: Vec<f64> = outs.iter().map(Value::value).collect();
        assert_eq!(values, vec![2.0, 3.5, 0.0]);
        assert_eq!(layer.n_inputs(), 2);
        assert_eq!(layer.n_outputs(), 3);
        Ok(())
    }

    #[test]
    fn test_layer_rejects_wrong_input_width() -> Result<(), ScalarGradError> {
        let layer = fixed_layer()?;
        assert!(matches!(
            layer.forward(&[Value::new(1.0)]),
            Err(ScalarGradError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_layer_parameters_follow_neuron_order() -> Result<(), ScalarGradError> {
        let layer = fixed_layer()?;
        let params = layer.parameters();
        assert_eq!(params.len(), 9);
        assert!(params[3].ptr_eq(&layer.neurons()[1].weights()[0]));
        assert!(params[8].ptr_eq(layer.neurons()[2].bias()));

        let named = layer.named_parameters();
        assert_eq!(named[0].0, "neurons.0.weight.0");
        assert_eq!(named[5].0, "neurons.1.bias");
        Ok(())
    }

    #[test]
    fn test_layer_construction_errors() -> Result<(), ScalarGradError> {
        assert!(matches!(
            Layer::from_neurons(vec![]),
            Err(ScalarGradError::InvalidArgument(_))
        ));
        let mismatched = Layer::from_neurons(vec![
            Neuron::from_parameters(vec![1.0, 2.0], 0.0, Activation::Relu)?,
            Neuron::from_parameters(vec![1.0], 0.0, Activation::Relu)?,
        ]);
        assert!(matches!(
            mismatched,
            Err(ScalarGradError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_layer_random_init() -> Result<(), ScalarGradError> {
        let mut rng = init_rng(Some(11));
        let layer = Layer::new(3, 4, Activation::Tanh, &Init::default(), &mut rng)?;
        assert_eq!(layer.n_outputs(), 4);
        assert_eq!(layer.num_parameters(), 4 * (3 + 1));
        Ok(())
    }
}
