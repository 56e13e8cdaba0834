mod scan_file;
