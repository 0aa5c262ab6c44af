//! Zero-argument environment constructors.

use std::sync::Arc;

use flow_env::{Environment, EnvResult, FlowEnv, Kernel, default_kernel};
use flow_params::FlowParams;

/// Builds a fresh environment each call.  Shared freely across threads.
pub type EnvCreator = Arc<dyn Fn() -> EnvResult<Box<dyn Environment>> + Send + Sync>;

/// Opens a kernel for the given configuration.
pub type KernelFactory = Arc<dyn Fn(&FlowParams) -> Box<dyn Kernel> + Send + Sync>;

/// Wrap `params` in a creator using the default kernel.
///
/// Returns the creator and the environment name `"<exp_tag>-v<version>"`.
/// Each call of the creator gets its own copy of `params`.
pub fn make_create_env(params: &FlowParams, version: u32) -> (EnvCreator, String) {
    make_create_env_with(params, version, Arc::new(default_kernel))
}

/// Like [`make_create_env`] with an explicit kernel factory.
pub fn make_create_env_with(
    params:  &FlowParams,
    version: u32,
    kernels: KernelFactory,
) -> (EnvCreator, String) {
    let env_name = format!("{}-v{}", params.exp_tag, version);
    let params = params.clone();
    let creator: EnvCreator = Arc::new(move || {
        let kernel = kernels(&params);
        let env: Box<dyn Environment> = Box::new(FlowEnv::new(params.clone(), kernel));
        Ok(env)
    });
    (creator, env_name)
}
