//! Build-time configuration for the frontend application.

use gitlogs_shared::BackendConfig;

// 编译时从环境变量读取后端地址；未设置时 production feature 使用线上地址，
// 否则为空（同源，由开发代理转发）
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("VITE_API_BASE_URL");

/// Backend every API call targets.
pub fn backend() -> BackendConfig {
    BackendConfig::resolve(API_BASE_OVERRIDE, cfg!(feature = "production"))
}
