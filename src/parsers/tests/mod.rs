mod anchor_scan_tests;
