/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T,RwyWatchError>;

#[derive(Error,Debug)]
pub enum RwyWatchError {

    /// malformed airport config - fatal at load time, the process must not start
    /// classification with an invalid region table
    #[error("configuration error {0}")]
    ConfigError(String),

    /// lookup of an unregistered airport id - recoverable by the caller
    #[error("no such airport {0}")]
    NoSuchAirport(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("common error {0}")]
    CommonError( #[from] rwy_common::errors::RwyCommonError),

    #[error("flight feed request error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("flight feed response error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("operation failed {0}")]
    OpFailedError(String)
}
