// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Status CPLD of the rack management controller (bus 10, address 0x23).
//!
//! Only the registers read by the rack diagnostics are mapped. Polarity is
//! carried by the expected value, not the name.

/// `(offset, bit, name, expected)`
pub static SIGNALS: &[(u8, u8, &str, u8)] = &[
    // AALC RPU ready, high = ready
    (0x00, 7, "wRPU_READY_PLD_R", 1),
    (0x00, 6, "wRPU_READY_SPARE_PLD_R", 1),
    (0x00, 5, "wRPU2_READY_PLD_R", 1),
    (0x00, 4, "wRPU2_READY_SPARE_PLD_R", 1),
    // tray liquid cooling cable detect, low = present
    (0x10, 6, "LC_CABLE_DET_TRAY1_N_R", 0),
    (0x10, 5, "LC_CABLE_DET_TRAY2_N_R", 0),
    (0x10, 4, "LC_CABLE_DET_TRAY3_N_R", 0),
    (0x10, 3, "LC_CABLE_DET_TRAY4_N_R", 0),
    (0x10, 2, "LC_CABLE_DET_TRAY5_N_R", 0),
    (0x10, 1, "LC_CABLE_DET_TRAY6_N_R", 0),
    (0x10, 0, "LC_CABLE_DET_TRAY7_N_R", 0),
    (0x11, 7, "LC_CABLE_DET_TRAY8_N_R", 0),
    (0x11, 6, "LC_CABLE_DET_TRAY9_N_R", 0),
    (0x11, 5, "LC_CABLE_DET_TRAY10_N_R", 0),
    (0x12, 4, "LC_CABLE_DET_TRAY11_N_R", 0),
    (0x12, 3, "LC_CABLE_DET_TRAY12_N_R", 0),
    // AALC GPIO cable detect, low = present
    (0x13, 3, "AALC1_PRSNT_N_R", 0),
    (0x13, 2, "AALC1_PRSNT_SPARE_N_R", 0),
    (0x13, 1, "AALC2_PRSNT_N_R", 0),
    (0x13, 0, "AALC2_PRSNT_SPARE_N_R", 0),
    // drip pan leak sensor presence, low = present
    (0x14, 1, "DRIP_PAN_LEAK_SNS0_PRSNT_N_R", 0),
    (0x14, 0, "DRIP_PAN_LEAK_SNS1_PRSNT_N_R", 0),
    (0x15, 7, "DRIP_PAN_LEAK_SNS2_PRSNT_N_R", 0),
    (0x16, 6, "DRIP_PAN_LEAK_SNS3_PRSNT_N_R", 0),
    (0x16, 5, "DRIP_PAN_LEAK_SNS4_PRSNT_N_R", 0),
];
