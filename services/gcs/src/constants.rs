// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to configure signing.
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const URLSIGN_GCS_CREDENTIAL: &str = "URLSIGN_GCS_CREDENTIAL";
pub const URLSIGN_GCS_CREDENTIAL_PATH: &str = "URLSIGN_GCS_CREDENTIAL_PATH";
pub const URLSIGN_GCS_BUCKET: &str = "URLSIGN_GCS_BUCKET";
pub const URLSIGN_GCS_HOST: &str = "URLSIGN_GCS_HOST";
pub const URLSIGN_GCS_REGION: &str = "URLSIGN_GCS_REGION";
pub const URLSIGN_GCS_EXPIRES: &str = "URLSIGN_GCS_EXPIRES";

// Protocol values of GOOG4 query signing.
pub const GOOG4_RSA_SHA256: &str = "GOOG4-RSA-SHA256";
pub const GOOG4_REQUEST: &str = "goog4_request";
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";
pub const SIGNED_HEADERS: &str = "host";

pub const X_GOOG_PREFIX: &str = "x-goog-";
pub const X_GOOG_ALGORITHM: &str = "X-Goog-Algorithm";
pub const X_GOOG_CREDENTIAL: &str = "X-Goog-Credential";
pub const X_GOOG_DATE: &str = "X-Goog-Date";
pub const X_GOOG_EXPIRES: &str = "X-Goog-Expires";
pub const X_GOOG_SIGNED_HEADERS: &str = "X-Goog-SignedHeaders";
pub const X_GOOG_SIGNATURE: &str = "X-Goog-Signature";

pub const DEFAULT_HOST: &str = "storage.googleapis.com";
pub const DEFAULT_REGION: &str = "auto";
pub const DEFAULT_SERVICE: &str = "storage";

/// Longest lifetime the storage service accepts for a V4 signed URL: 7 days.
pub const MAX_EXPIRES_SECS: u32 = 604_800;
/// Lifetime handed out when callers don't ask for one: 5 minutes.
pub const DEFAULT_EXPIRES_SECS: u32 = 300;

/// AsciiSet for [Google UriEncode](https://cloud.google.com/storage/docs/authentication/canonical-requests)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `/` is kept as is since object names use it as a path separator.
pub static GOOG_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [Google UriEncode](https://cloud.google.com/storage/docs/authentication/canonical-requests)
///
/// But used in query, so `/` is encoded too.
pub static GOOG_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
