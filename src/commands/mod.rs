// Copyright (c) 2025 Fluxo contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod fixed;
pub mod limits;
pub mod reports;
pub mod transactions;
