// Copyright (C) 2026 The Matchday Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store operations, grouped by the entity they act on.

mod clubs;
mod matches;
mod stadiums;
