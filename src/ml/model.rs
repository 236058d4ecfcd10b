use burn::{
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{AvgPool2d, AvgPool2dConfig},
        Linear, LinearConfig, PaddingConfig2d,
    },
    prelude::*,
    tensor::activation,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct LeNetConfig {
    /// Number of output classes (the ten digits for MNIST)
    #[config(default = 10)]
    pub num_classes: usize,

    /// Symmetric zero padding applied by the first convolution.
    /// 2 pads 28×28 MNIST images up to the 32×32 LeNet expects.
    #[config(default = 2)]
    pub padding: usize,
}

impl LeNetConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> LeNet<B> {
        let conv1 = Conv2dConfig::new([1, 6], [5, 5])
            .with_padding(PaddingConfig2d::Explicit(self.padding, self.padding))
            .init(device);
        let conv2 = Conv2dConfig::new([6, 16], [5, 5]).init(device);
        let conv3 = Conv2dConfig::new([16, 120], [5, 5]).init(device);

        // Pooling defaults to stride 1; LeNet halves the feature map,
        // so the stride must match the 2×2 window explicitly.
        let pool1 = AvgPool2dConfig::new([2, 2]).with_strides([2, 2]).init();
        let pool2 = AvgPool2dConfig::new([2, 2]).with_strides([2, 2]).init();

        let fc1 = LinearConfig::new(120, 84).init(device);
        let fc2 = LinearConfig::new(84, self.num_classes).init(device);

        LeNet { conv1, pool1, conv2, pool2, conv3, fc1, fc2 }
    }
}

/// The LeNet-5 topology (LeCun et al., 1998) sized for MNIST digits.
#[derive(Module, Debug)]
pub struct LeNet<B: Backend> {
    pub conv1: Conv2d<B>,
    pub pool1: AvgPool2d,
    pub conv2: Conv2d<B>,
    pub pool2: AvgPool2d,
    pub conv3: Conv2d<B>,
    pub fc1:   Linear<B>,
    pub fc2:   Linear<B>,
}

impl<B: Backend> LeNet<B> {
    /// images: [batch, 1, 28, 28] → log-probabilities: [batch, num_classes]
    ///
    /// Shape walkthrough with padding=2:
    ///   [N, 1, 28, 28] → conv1(pad 2) → [N, 6, 28, 28]  → pool → [N, 6, 14, 14]
    ///                  → conv2        → [N, 16, 10, 10] → pool → [N, 16, 5, 5]
    ///                  → conv3        → [N, 120, 1, 1]  → flatten → [N, 120]
    ///                  → fc1 → [N, 84] → fc2 → [N, num_classes]
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = activation::tanh(self.conv1.forward(images));
        let x = self.pool1.forward(x);
        let x = activation::tanh(self.conv2.forward(x));
        let x = self.pool2.forward(x);
        let x = activation::tanh(self.conv3.forward(x));

        // [N, 120, 1, 1] → [N, 120]
        let x = x.flatten::<2>(1, 3);

        let x = activation::tanh(self.fc1.forward(x));
        let logits = self.fc2.forward(x);

        activation::log_softmax(logits, 1)
    }

    /// Forward pass plus the scalar mean-NLL loss for the batch.
    pub fn forward_loss(
        &self,
        images:  Tensor<B, 4>,
        targets: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let log_probs = self.forward(images);
        let loss = nll_loss(log_probs.clone(), targets);
        (loss, log_probs)
    }
}

/// Mean negative log-likelihood over a batch of log-probabilities.
///
/// The model's last layer is already log-softmax, so the loss just
/// picks each sample's log-probability at its target class:
///   loss = -mean(log_probs[i, targets[i]])
pub fn nll_loss<B: Backend>(
    log_probs: Tensor<B, 2>,
    targets:   Tensor<B, 1, Int>,
) -> Tensor<B, 1> {
    let [batch_size, _] = log_probs.dims();
    let picked = log_probs.gather(1, targets.reshape([batch_size, 1]));
    picked.mean().neg()
}
